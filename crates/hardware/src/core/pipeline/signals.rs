//! Signal bundles exchanged with the requester and the responder.
//!
//! Each tick the controller samples one bundle from each side and drives one bundle to
//! each side:
//! 1. **Requester in:** [`RequesterInputs`], carrying an optional [`MemoryRequest`] and the lock level.
//! 2. **Requester out:** [`StatusOutputs`], the busy levels and the completion pulse.
//! 3. **Responder out:** [`BusRequest`], segment claims, strobes, and the lane-placed transaction.
//! 4. **Responder in:** [`BusResponse`], stall, acknowledge, error, and read data.

use crate::common::addr::ByteAddr;
use crate::common::data::{AccessWidth, Segment};

/// A load or store issued by the requester.
///
/// Consumed on the tick it is presented; the controller does not buffer it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryRequest {
    /// Access width.
    pub width: AccessWidth,
    /// Store when true, load otherwise.
    pub write: bool,
    /// Byte address.
    pub addr: ByteAddr,
    /// Right-aligned write payload; ignored for loads.
    pub data: u32,
    /// Destination tag echoed with the completion.
    pub tag: u8,
}

impl MemoryRequest {
    /// Builds a load request.
    pub fn read(width: AccessWidth, addr: impl Into<ByteAddr>, tag: u8) -> Self {
        Self {
            width,
            write: false,
            addr: addr.into(),
            data: 0,
            tag,
        }
    }

    /// Builds a store request.
    pub fn write(width: AccessWidth, addr: impl Into<ByteAddr>, data: u32, tag: u8) -> Self {
        Self {
            width,
            write: true,
            addr: addr.into(),
            data,
            tag,
        }
    }
}

/// Everything the requester drives on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequesterInputs {
    /// New request, if one is presented this tick.
    pub request: Option<MemoryRequest>,
    /// Lock request level; sampled every tick, including idle gaps.
    pub lock: bool,
}

impl RequesterInputs {
    /// A tick with nothing presented and no lock.
    pub const IDLE: Self = Self {
        request: None,
        lock: false,
    };

    /// Presents `request` with the given lock level.
    pub const fn issue(request: MemoryRequest, lock: bool) -> Self {
        Self {
            request: Some(request),
            lock,
        }
    }

    /// Presents no request but holds the lock level.
    pub const fn hold(lock: bool) -> Self {
        Self {
            request: None,
            lock,
        }
    }
}

/// Everything the controller drives toward the bus on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusRequest {
    /// Global segment claimed (cycle line).
    pub claim_global: bool,
    /// Local segment claimed (cycle line).
    pub claim_local: bool,
    /// Transaction offered on the global segment.
    pub strobe_global: bool,
    /// Transaction offered on the local segment.
    pub strobe_local: bool,
    /// Transaction is a write.
    pub write: bool,
    /// Word-aligned byte address.
    pub addr: u32,
    /// Lane-placed write data.
    pub data: u32,
    /// Byte-enable mask; bit 3 selects data bits 31:24.
    pub sel: u8,
}

impl BusRequest {
    /// Returns the claimed segment, or `None`. Prefers global if both are (illegally) set.
    pub const fn claim(&self) -> Option<Segment> {
        if self.claim_global {
            Some(Segment::Global)
        } else if self.claim_local {
            Some(Segment::Local)
        } else {
            None
        }
    }

    /// Returns the strobed segment, or `None`. Prefers global if both are (illegally) set.
    pub const fn strobe(&self) -> Option<Segment> {
        if self.strobe_global {
            Some(Segment::Global)
        } else if self.strobe_local {
            Some(Segment::Local)
        } else {
            None
        }
    }

    /// Returns whether `segment` is claimed.
    pub const fn claims(&self, segment: Segment) -> bool {
        match segment {
            Segment::Global => self.claim_global,
            Segment::Local => self.claim_local,
        }
    }

    /// Returns whether `segment` is strobed.
    pub const fn strobes(&self, segment: Segment) -> bool {
        match segment {
            Segment::Global => self.strobe_global,
            Segment::Local => self.strobe_local,
        }
    }

    /// Returns the view of this request seen by the responder on `segment`.
    ///
    /// The other segment's claim and strobe are masked off.
    pub const fn for_segment(&self, segment: Segment) -> Self {
        let global = matches!(segment, Segment::Global);
        Self {
            claim_global: global && self.claim_global,
            claim_local: !global && self.claim_local,
            strobe_global: global && self.strobe_global,
            strobe_local: !global && self.strobe_local,
            ..*self
        }
    }
}

/// Everything the responder drives back on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusResponse {
    /// The offered strobe was not accepted this tick.
    pub stall: bool,
    /// The in-flight transaction completed.
    pub ack: bool,
    /// The in-flight transaction failed.
    pub err: bool,
    /// Read data bus.
    pub data: u32,
}

impl BusResponse {
    /// No activity.
    pub const IDLE: Self = Self {
        stall: false,
        ack: false,
        err: false,
        data: 0,
    };

    /// Strobe not accepted.
    pub const STALL: Self = Self {
        stall: true,
        ..Self::IDLE
    };

    /// Error termination.
    pub const ERR: Self = Self {
        err: true,
        ..Self::IDLE
    };

    /// Successful completion carrying `data`.
    pub const fn ack(data: u32) -> Self {
        Self {
            ack: true,
            data,
            ..Self::IDLE
        }
    }

    /// Returns whether the in-flight transaction resolved this tick.
    pub const fn resolves(&self) -> bool {
        self.ack || self.err
    }
}

/// Requester-facing status for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusOutputs {
    /// A transaction is in flight; no request may be presented.
    pub busy: bool,
    /// A load is outstanding, through the tick of its `valid` pulse.
    pub read_busy: bool,
    /// One-tick pulse: a load completed and `result` holds its value.
    pub valid: bool,
    /// One-tick pulse: a request failed (misaligned or responder error).
    pub error: bool,
    /// Tag of the most recently accepted request.
    pub tag: u8,
    /// Zero-extended load result.
    pub result: u32,
}

impl StatusOutputs {
    /// Returns whether a completion pulse is present.
    pub const fn completed(&self) -> bool {
        self.valid || self.error
    }
}

/// All controller outputs for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutputs {
    /// Responder-facing outputs.
    pub bus: BusRequest,
    /// Requester-facing outputs.
    pub status: StatusOutputs,
}
