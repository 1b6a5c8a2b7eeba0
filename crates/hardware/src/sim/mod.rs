//! Simulation driver.
//!
//! Couples the controller to its responders and runs whole memory operations.

/// Tick loop and operation runner.
pub mod simulator;

pub use simulator::{Completion, Simulator};
