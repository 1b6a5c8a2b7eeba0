//! Responder trait for bus targets.
//!
//! This module defines the `Responder` trait implemented by everything attached to a bus
//! segment. It provides:
//! 1. **Identification:** `name` for diagnostics.
//! 2. **Handshake:** `respond`, which answers one tick of bus outputs.
//! 3. **Lifecycle:** Optional `reset`.
//! 4. **Downcasting:** Optional cast to `SegmentMemory` for backdoor access.
//!
//! A responder must eventually resolve every accepted strobe with exactly one of
//! acknowledge or error.

use crate::core::pipeline::signals::{BusRequest, BusResponse};
use crate::soc::memory::SegmentMemory;

/// A target attached to one bus segment.
pub trait Responder: Send {
    /// Returns a short name for this responder (e.g., `"SRAM0"`).
    fn name(&self) -> &str;

    /// Answers the controller's bus outputs for the current tick and advances one tick.
    ///
    /// The request is already masked to this responder's segment: a claim or strobe on the
    /// other segment is not visible.
    fn respond(&mut self, req: &BusRequest) -> BusResponse;

    /// Drops any in-flight transaction.
    fn reset(&mut self) {}

    /// Returns a mutable reference as `SegmentMemory` if this responder is a model memory.
    fn as_memory_mut(&mut self) -> Option<&mut SegmentMemory> {
        None
    }
}
