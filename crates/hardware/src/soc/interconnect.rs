//! Segment decode and response routing.
//!
//! This module implements the two-segment bus fabric seen by the controller. It provides:
//! 1. **Segment Selection:** Local aperture decode of request addresses.
//! 2. **Routing:** Each responder sees only its own segment's claim and strobe.
//! 3. **Response Merge:** The two responses are combined into the single handshake the
//!    controller samples.

use crate::common::addr::ByteAddr;
use crate::common::data::Segment;
use crate::config::ControllerConfig;
use crate::core::pipeline::signals::{BusRequest, BusResponse};
use crate::soc::traits::Responder;

/// Selects the segment a request targets.
///
/// Returns `None` for a misaligned request, which never reaches the bus. Otherwise the
/// local segment is chosen when local decoding is enabled and the top address byte equals
/// the aperture marker.
///
/// # Arguments
///
/// * `config` - Controller options (local enable and aperture marker).
/// * `addr` - Request byte address.
/// * `aligned` - Result of the alignment check for this request.
pub const fn select_segment(
    config: &ControllerConfig,
    addr: ByteAddr,
    aligned: bool,
) -> Option<Segment> {
    if !aligned {
        None
    } else if config.enable_local_segment && addr.top_byte() == config.local_aperture {
        Some(Segment::Local)
    } else {
        Some(Segment::Global)
    }
}

/// The pair of responders behind the controller.
pub struct Interconnect {
    global: Box<dyn Responder>,
    local: Box<dyn Responder>,
}

impl std::fmt::Debug for Interconnect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interconnect")
            .field("global", &self.global.name())
            .field("local", &self.local.name())
            .finish()
    }
}

impl Interconnect {
    /// Attaches one responder to each segment.
    pub fn new(global: Box<dyn Responder>, local: Box<dyn Responder>) -> Self {
        Self { global, local }
    }

    /// Returns the responder attached to `segment`.
    pub fn responder(&mut self, segment: Segment) -> &mut dyn Responder {
        match segment {
            Segment::Global => self.global.as_mut(),
            Segment::Local => self.local.as_mut(),
        }
    }

    /// Routes one tick of bus outputs to both responders and merges their answers.
    ///
    /// Stall is taken from the strobed segment only; acknowledge and error from either.
    /// Read data comes from the segment currently claimed.
    pub fn respond(&mut self, req: &BusRequest) -> BusResponse {
        let global = self.global.respond(&req.for_segment(Segment::Global));
        let local = self.local.respond(&req.for_segment(Segment::Local));

        let stall = (req.strobe_global && global.stall) || (req.strobe_local && local.stall);
        let data = if req.claim_local { local.data } else { global.data };
        BusResponse {
            stall,
            ack: global.ack || local.ack,
            err: global.err || local.err,
            data,
        }
    }

    /// Resets both responders.
    pub fn reset(&mut self) {
        self.global.reset();
        self.local.reset();
    }
}
