//! Timing models for the model memories.
//!
//! This module provides:
//! 1. **SimpleController:** Fixed stall count and fixed latency per access.
//! 2. **ScriptedController:** A per-access timing script, for exercising specific handshakes.

use std::collections::VecDeque;

/// Handshake timing of one access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessTiming {
    /// Ticks the strobe is stalled before it is accepted.
    pub stall: u64,
    /// Ticks from acceptance to acknowledgement; zero acknowledges on the accepting tick.
    pub latency: u64,
}

/// Trait for timing models that decide how a memory answers each access.
pub trait MemoryController: Send {
    /// Returns the timing of an access to the given word address.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word-aligned address being accessed.
    /// * `write` - The access is a write.
    fn access_timing(&mut self, addr: u32, write: bool) -> AccessTiming;
}

/// Fixed-timing controller; every access stalls and waits the same number of ticks.
#[derive(Clone, Copy, Debug)]
pub struct SimpleController {
    timing: AccessTiming,
}

impl SimpleController {
    /// Creates a simple controller.
    ///
    /// # Arguments
    ///
    /// * `stall` - Stall ticks per access.
    /// * `latency` - Ticks from acceptance to acknowledgement.
    pub const fn new(stall: u64, latency: u64) -> Self {
        Self {
            timing: AccessTiming { stall, latency },
        }
    }
}

impl MemoryController for SimpleController {
    fn access_timing(&mut self, _addr: u32, _write: bool) -> AccessTiming {
        self.timing
    }
}

/// Controller that replays a queue of timings, then falls back to a default.
#[derive(Clone, Debug)]
pub struct ScriptedController {
    script: VecDeque<AccessTiming>,
    fallback: AccessTiming,
}

impl ScriptedController {
    /// Creates a controller that answers accesses with `script` in order, then `fallback`.
    pub fn new(script: impl IntoIterator<Item = AccessTiming>, fallback: AccessTiming) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
        }
    }
}

impl MemoryController for ScriptedController {
    fn access_timing(&mut self, _addr: u32, _write: bool) -> AccessTiming {
        self.script.pop_front().unwrap_or(self.fallback)
    }
}
