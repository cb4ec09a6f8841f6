//! Test support shared by the engine's integration tests and the simulator.

pub mod test_logging;
