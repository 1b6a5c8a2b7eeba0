//! Execution units used by the bus controller.
//!
//! This module contains the Load/Store Unit helpers: alignment checking,
//! byte-lane placement, and the bus lock.

/// Load/Store Unit (alignment, lanes, lock).
pub mod lsu;
