//! Per-tick property checking.
//!
//! [`PropertyChecker`] watches the controller's outputs and the responder's answers one
//! tick at a time and reports the first invariant that does not hold. It sees only the
//! interface signals, so it can check any implementation of the controller's contract.

use crate::common::data::Segment;
use crate::common::error::PropertyViolation;
use crate::core::pipeline::signals::{BusResponse, TickOutputs};

/// Interface signals of one tick.
#[derive(Clone, Copy, Debug)]
struct Observed {
    outputs: TickOutputs,
    response: BusResponse,
}

/// Checks controller invariants across consecutive ticks.
#[derive(Clone, Debug, Default)]
pub struct PropertyChecker {
    tick: u64,
    prev: Option<Observed>,
}

impl PropertyChecker {
    /// Creates a checker that has observed nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of ticks checked so far.
    pub const fn ticks(&self) -> u64 {
        self.tick
    }

    /// Checks one tick of outputs and the responder's answer to them.
    ///
    /// # Errors
    ///
    /// Returns the first [`PropertyViolation`] found on this tick.
    pub fn check(
        &mut self,
        outputs: &TickOutputs,
        response: &BusResponse,
    ) -> Result<(), PropertyViolation> {
        let tick = self.tick;
        self.tick += 1;
        let prev = self.prev.replace(Observed {
            outputs: *outputs,
            response: *response,
        });

        let bus = &outputs.bus;
        let status = &outputs.status;

        if bus.claim_global && bus.claim_local {
            return Err(PropertyViolation::BothSegmentsClaimed { tick });
        }
        if bus.strobe_global && bus.strobe_local {
            return Err(PropertyViolation::MultipleStrobes { tick });
        }
        for segment in [Segment::Global, Segment::Local] {
            if bus.strobes(segment) && !bus.claims(segment) {
                return Err(PropertyViolation::StrobeWithoutClaim { tick, segment });
            }
        }
        if status.valid && status.error {
            return Err(PropertyViolation::ValidAndError { tick });
        }
        if status.completed() && status.busy {
            return Err(PropertyViolation::PulseWhileBusy { tick });
        }
        if status.busy && bus.claim().is_none() {
            return Err(PropertyViolation::BusyWithoutClaim { tick });
        }
        if status.valid && !status.read_busy {
            return Err(PropertyViolation::ValidWithoutReadBusy { tick });
        }

        let Some(prev) = prev else {
            if status.valid {
                return Err(PropertyViolation::SpuriousValid { tick });
            }
            return Ok(());
        };

        let acked_read = prev.outputs.status.busy
            && prev.response.ack
            && !prev.response.err
            && !prev.outputs.bus.write;
        if status.valid && !acked_read {
            return Err(PropertyViolation::SpuriousValid { tick });
        }

        let held = prev.response.stall && !prev.response.resolves();
        match prev.outputs.bus.strobe() {
            Some(segment) if held && !bus.strobes(segment) => {
                Err(PropertyViolation::StrobeDropped { tick, segment })
            }
            _ => Ok(()),
        }
    }

    /// Forgets all history, as after a controller reset.
    pub fn reset(&mut self) {
        self.prev = None;
    }
}
