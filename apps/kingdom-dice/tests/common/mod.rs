#![allow(dead_code)]

// tests/common/mod.rs
pub mod proptest_prelude;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    engine_test_support::test_logging::init();
}
