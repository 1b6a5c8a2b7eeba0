//! Fault and property-violation definitions.
//!
//! This module defines the error types of the controller model. It provides:
//! 1. **Memory Faults:** The two ways a memory operation can fail (misalignment, responder error).
//! 2. **Property Violations:** Per-tick invariants of the controller, as reported by the monitor.
//! 3. **Simulation Errors:** Outcomes of driving a whole operation through the simulator.
//!
//! The controller itself reports every fault to the requester as the same one-tick `error`
//! pulse; these types exist so host code can tell the outcomes apart.

use thiserror::Error;

use super::addr::ByteAddr;
use super::data::{AccessWidth, Segment};

/// Terminal outcome of a failed memory operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemFault {
    /// The address violates the alignment rule for the access width.
    ///
    /// Detected before any bus transaction is issued; no segment is ever claimed.
    #[error("misaligned {width} access at {addr}")]
    MisalignedAccess {
        /// Requested byte address.
        addr: ByteAddr,
        /// Requested access width.
        width: AccessWidth,
    },

    /// The responder terminated an in-flight transaction with an error.
    ///
    /// Always clears any held lock.
    #[error("{segment} bus error at {addr}")]
    ResponderError {
        /// Segment the transaction was issued on.
        segment: Segment,
        /// Requested byte address.
        addr: ByteAddr,
    },
}

/// A per-tick controller invariant observed to be false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PropertyViolation {
    /// Both segment claims were asserted on the same tick.
    #[error("tick {tick}: global and local segments claimed together")]
    BothSegmentsClaimed {
        /// Tick on which the violation was observed.
        tick: u64,
    },

    /// Both segment strobes were asserted on the same tick.
    #[error("tick {tick}: more than one transaction strobed")]
    MultipleStrobes {
        /// Tick on which the violation was observed.
        tick: u64,
    },

    /// A strobe was asserted on a segment that was not claimed.
    #[error("tick {tick}: {segment} strobe without a claim")]
    StrobeWithoutClaim {
        /// Tick on which the violation was observed.
        tick: u64,
        /// Segment whose strobe was unclaimed.
        segment: Segment,
    },

    /// `valid` and `error` were pulsed together.
    #[error("tick {tick}: valid and error pulsed together")]
    ValidAndError {
        /// Tick on which the violation was observed.
        tick: u64,
    },

    /// A completion pulse was raised while the controller reported busy.
    #[error("tick {tick}: completion pulse while busy")]
    PulseWhileBusy {
        /// Tick on which the violation was observed.
        tick: u64,
    },

    /// The controller reported busy with no segment claimed.
    #[error("tick {tick}: busy without a segment claim")]
    BusyWithoutClaim {
        /// Tick on which the violation was observed.
        tick: u64,
    },

    /// A strobe stalled by the responder was released before it was accepted.
    #[error("tick {tick}: stalled {segment} strobe dropped")]
    StrobeDropped {
        /// Tick on which the violation was observed.
        tick: u64,
        /// Segment whose strobe was dropped.
        segment: Segment,
    },

    /// `valid` was pulsed without an acknowledged read on the previous tick.
    #[error("tick {tick}: valid without an acknowledged read")]
    SpuriousValid {
        /// Tick on which the violation was observed.
        tick: u64,
    },

    /// `valid` was pulsed while `read_busy` was low.
    #[error("tick {tick}: valid while read-busy is low")]
    ValidWithoutReadBusy {
        /// Tick on which the violation was observed.
        tick: u64,
    },
}

/// Failure of a simulated memory operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The operation completed with an error pulse.
    #[error(transparent)]
    Fault(#[from] MemFault),

    /// The property monitor caught an invariant violation.
    #[error(transparent)]
    Property(#[from] PropertyViolation),

    /// The responder did not resolve the operation in time.
    #[error("no completion after {ticks} ticks")]
    Timeout {
        /// Ticks waited.
        ticks: u64,
    },
}
