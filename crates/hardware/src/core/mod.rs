//! Controller core.
//!
//! This module contains the transaction sequencer and status latch, the signal bundles it
//! exchanges with the requester and the bus, the units it is built from, and a checker for
//! its interface properties.

/// Transaction sequencer, lock register, and status latch.
pub mod controller;

/// Interface property checker.
pub mod monitor;

/// Signal bundles and registered latches.
pub mod pipeline;

/// Execution units (alignment, byte lanes, lock).
pub mod units;

pub use self::controller::MemOps;
