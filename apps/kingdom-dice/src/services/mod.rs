//! Services that drive a session on behalf of a host application.

pub mod game_flow;

pub use game_flow::{AiStep, GameFlowService};
