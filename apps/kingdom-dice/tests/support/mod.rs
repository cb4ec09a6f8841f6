#![allow(dead_code)]

pub mod flow;
pub mod views;
