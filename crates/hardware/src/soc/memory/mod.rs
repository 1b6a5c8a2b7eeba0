//! Model memories attached to the bus segments.
//!
//! This module implements the RAM-backed responder used behind each segment. It provides:
//! 1. **Storage:** Word-organised backing store with byte-enable writes.
//! 2. **Handshake:** Stall, acknowledge, and error generation from a timing model.
//! 3. **Controller:** Timing models (fixed or scripted) for the handshake.

/// Timing models for the handshake.
pub mod controller;

use tracing::trace;

use self::controller::{AccessTiming, MemoryController};
use crate::common::constants::{BYTE_LANES, WORD_ADDR_MASK};
use crate::core::pipeline::signals::{BusRequest, BusResponse};
use crate::soc::traits::Responder;

/// Handshake progress of the memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Stalling {
        remaining: u64,
        latency: u64,
    },
    Pending {
        remaining: u64,
        response: BusResponse,
    },
}

/// A RAM window on one bus segment.
///
/// Accesses outside the window are terminated with a bus error.
pub struct SegmentMemory {
    name: String,
    base: u32,
    words: Vec<u32>,
    controller: Box<dyn MemoryController>,
    phase: Phase,
}

impl std::fmt::Debug for SegmentMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentMemory")
            .field("name", &self.name)
            .field("base", &format_args!("{:#010x}", self.base))
            .field("size", &self.size())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl SegmentMemory {
    /// Creates a zero-filled memory window.
    ///
    /// # Arguments
    ///
    /// * `name` - Diagnostic name.
    /// * `base` - Word-aligned base address.
    /// * `size` - Size in bytes; rounded down to whole words.
    /// * `controller` - Timing model for the handshake.
    pub fn new(
        name: impl Into<String>,
        base: u32,
        size: u32,
        controller: Box<dyn MemoryController>,
    ) -> Self {
        Self {
            name: name.into(),
            base: base & WORD_ADDR_MASK,
            words: vec![0; (size / BYTE_LANES) as usize],
            controller,
            phase: Phase::Idle,
        }
    }

    /// Returns the window size in bytes.
    pub fn size(&self) -> u32 {
        (self.words.len() as u32) * BYTE_LANES
    }

    fn index(&self, addr: u32) -> Option<usize> {
        let offset = addr.checked_sub(self.base)?;
        let index = (offset / BYTE_LANES) as usize;
        (index < self.words.len()).then_some(index)
    }

    /// Reads the word containing `addr` without a bus transaction.
    pub fn peek(&self, addr: u32) -> Option<u32> {
        self.index(addr).map(|i| self.words[i])
    }

    /// Writes the word containing `addr` without a bus transaction.
    ///
    /// Returns `false` if `addr` is outside the window.
    pub fn poke(&mut self, addr: u32, value: u32) -> bool {
        match self.index(addr) {
            Some(i) => {
                self.words[i] = value;
                true
            }
            None => false,
        }
    }

    /// Performs the access carried by `req` and returns its terminating response.
    fn access(&mut self, req: &BusRequest) -> BusResponse {
        let Some(i) = self.index(req.addr) else {
            trace!(target: "memops::memory", memory = %self.name, addr = req.addr, "out of window");
            return BusResponse::ERR;
        };
        if req.write {
            let mask = lane_mask(req.sel);
            self.words[i] = (self.words[i] & !mask) | (req.data & mask);
            BusResponse::ack(0)
        } else {
            BusResponse::ack(self.words[i])
        }
    }

    fn accept(&mut self, req: &BusRequest, latency: u64) -> BusResponse {
        let response = self.access(req);
        if latency == 0 {
            self.phase = Phase::Idle;
            response
        } else {
            self.phase = Phase::Pending {
                remaining: latency - 1,
                response,
            };
            BusResponse::IDLE
        }
    }
}

/// Expands a byte-enable mask into a bit mask over the data word.
fn lane_mask(sel: u8) -> u32 {
    (0..BYTE_LANES)
        .filter(|lane| sel & (1 << lane) != 0)
        .fold(0, |mask, lane| mask | (0xFF << (lane * 8)))
}

impl Responder for SegmentMemory {
    fn name(&self) -> &str {
        &self.name
    }

    fn respond(&mut self, req: &BusRequest) -> BusResponse {
        let claimed = req.claim_global || req.claim_local;
        let strobed = req.strobe_global || req.strobe_local;
        if !claimed {
            self.phase = Phase::Idle;
            return BusResponse::IDLE;
        }

        match self.phase {
            Phase::Pending {
                remaining: 0,
                response,
            } => {
                self.phase = Phase::Idle;
                response
            }
            Phase::Pending {
                remaining,
                response,
            } => {
                self.phase = Phase::Pending {
                    remaining: remaining - 1,
                    response,
                };
                BusResponse::IDLE
            }
            Phase::Stalling { remaining, latency } if strobed => {
                if remaining == 0 {
                    self.accept(req, latency)
                } else {
                    self.phase = Phase::Stalling {
                        remaining: remaining - 1,
                        latency,
                    };
                    BusResponse::STALL
                }
            }
            Phase::Idle if strobed => {
                let AccessTiming { stall, latency } =
                    self.controller.access_timing(req.addr, req.write);
                if stall == 0 {
                    self.accept(req, latency)
                } else {
                    self.phase = Phase::Stalling {
                        remaining: stall - 1,
                        latency,
                    };
                    BusResponse::STALL
                }
            }
            Phase::Idle | Phase::Stalling { .. } => BusResponse::IDLE,
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    fn as_memory_mut(&mut self) -> Option<&mut SegmentMemory> {
        Some(self)
    }
}
