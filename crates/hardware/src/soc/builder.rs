//! System construction and the top-level `System` type.
//!
//! This module builds the bus fabric behind the controller from configuration. It performs:
//! 1. **Memory setup:** One model memory per segment, sized and placed from `SystemConfig`.
//! 2. **Timing:** A fixed-timing controller per memory from the configured stall and latency.
//! 3. **Routing:** An interconnect that presents both memories as one handshake.

use crate::common::data::Segment;
use crate::config::SystemConfig;
use crate::core::pipeline::signals::{BusRequest, BusResponse};
use crate::soc::interconnect::Interconnect;
use crate::soc::memory::SegmentMemory;
use crate::soc::memory::controller::SimpleController;
use crate::soc::traits::Responder;

/// The responders behind the controller.
#[derive(Debug)]
pub struct System {
    /// Segment fabric; routes bus outputs to the global and local responders.
    pub interconnect: Interconnect,
}

impl System {
    /// Builds a system with one model memory per segment.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory windows and handshake timing.
    pub fn new(config: &SystemConfig) -> Self {
        let timing = || Box::new(SimpleController::new(config.stall_cycles, config.latency));
        let global = SegmentMemory::new(
            "SRAM0",
            config.global_base,
            config.global_size,
            timing(),
        );
        let local = SegmentMemory::new("LRAM0", config.local_base, config.local_size, timing());
        Self::with_responders(Box::new(global), Box::new(local))
    }

    /// Builds a system from arbitrary responders.
    pub fn with_responders(global: Box<dyn Responder>, local: Box<dyn Responder>) -> Self {
        Self {
            interconnect: Interconnect::new(global, local),
        }
    }

    /// Answers one tick of bus outputs.
    pub fn respond(&mut self, req: &BusRequest) -> BusResponse {
        self.interconnect.respond(req)
    }

    /// Returns the responder attached to `segment`.
    pub fn responder(&mut self, segment: Segment) -> &mut dyn Responder {
        self.interconnect.responder(segment)
    }

    /// Returns the model memory attached to `segment`, if it is one.
    pub fn memory(&mut self, segment: Segment) -> Option<&mut SegmentMemory> {
        self.interconnect.responder(segment).as_memory_mut()
    }

    /// Drops all in-flight responder state.
    pub fn reset(&mut self) {
        self.interconnect.reset();
    }
}
