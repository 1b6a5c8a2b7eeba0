//! Bus lock manager.
//!
//! Keeps a segment claimed across the idle gaps of a locked sequence of transactions, so
//! the responder sees one uninterrupted ownership window for read-modify-write.
//!
//! The lock is a state of its own rather than a field of the transaction: it outlives
//! every transaction it spans.

use crate::common::data::Segment;

/// Persistent lock state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockState {
    /// No segment is held.
    #[default]
    Unlocked,

    /// The segment stays claimed between transactions.
    Held(Segment),
}

/// Per-tick inputs to the lock transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockInputs {
    /// The requester is asserting its lock request.
    pub requested: bool,
    /// Segment with a transaction active this tick, if any.
    pub active: Option<Segment>,
    /// Segment a request is being issued to this tick, if any.
    pub issued: Option<Segment>,
    /// A responder error on the active transaction or a misaligned request this tick.
    pub fault: bool,
}

impl LockState {
    /// Returns the held segment, if any.
    pub const fn held(self) -> Option<Segment> {
        match self {
            Self::Unlocked => None,
            Self::Held(segment) => Some(segment),
        }
    }

    /// Computes the lock state for the next tick.
    ///
    /// A lock is taken on the segment that is active while the requester asserts lock,
    /// and kept while the requester keeps asserting it. Faults, a dropped request, and
    /// any request to the other segment release it. Inert when `enabled` is false.
    pub fn next(self, enabled: bool, inputs: &LockInputs) -> Self {
        if !enabled || inputs.fault || !inputs.requested {
            return Self::Unlocked;
        }
        match self.held().or(inputs.active) {
            Some(segment) if inputs.issued.is_none_or(|target| target == segment) => {
                Self::Held(segment)
            }
            _ => Self::Unlocked,
        }
    }

    /// Returns whether `segment` is claimed, given the sequencer's active segment.
    pub fn claims(self, segment: Segment, active: Option<Segment>) -> bool {
        active == Some(segment) || self.held() == Some(segment)
    }
}
