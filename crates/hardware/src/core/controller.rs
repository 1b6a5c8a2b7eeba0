//! Load/store bus controller.
//!
//! This module implements the transaction sequencer and status latch. It provides:
//! 1. **State Record:** [`ControllerState`], every register of the controller in one value.
//! 2. **Step Function:** [`ControllerState::step`], prior state plus inputs to next state plus outputs.
//! 3. **Wrapper:** [`MemOps`], which owns the state, its options, and its statistics.
//!
//! All outputs are registered: they are a function of the current state only. Within a
//! tick every read of prior state happens before the next state is built, so there are no
//! intra-tick hazards.
//!
//! At most one transaction is ever in flight. A request presented while the controller is
//! busy is not accepted and is not queued; presenting one is a requester contract violation.

use tracing::{debug, warn};

use crate::common::addr::ByteAddr;
use crate::common::data::Segment;
use crate::config::ControllerConfig;
use crate::core::pipeline::latches::{BusLatch, RecordedOp};
use crate::core::pipeline::signals::{
    BusRequest, BusResponse, MemoryRequest, RequesterInputs, StatusOutputs, TickOutputs,
};
use crate::core::units::lsu::lanes::LaneFill;
use crate::core::units::lsu::lock::{LockInputs, LockState};
use crate::core::units::lsu::unaligned;
use crate::soc::interconnect::select_segment;
use crate::stats::ControllerStats;

/// Sequencer phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sequencer {
    /// No transaction in flight.
    #[default]
    Idle,

    /// A transaction is in flight on `segment`.
    Active {
        /// Segment the transaction was issued on.
        segment: Segment,
        /// The strobe is still offered (not yet accepted by the responder).
        strobe: bool,
    },
}

impl Sequencer {
    /// Returns the active segment, if any.
    pub const fn segment(self) -> Option<Segment> {
        match self {
            Self::Idle => None,
            Self::Active { segment, .. } => Some(segment),
        }
    }

    /// Returns the segment whose strobe is offered, if any.
    pub const fn strobe(self) -> Option<Segment> {
        match self {
            Self::Active {
                segment,
                strobe: true,
            } => Some(segment),
            _ => None,
        }
    }

    /// Returns whether a transaction is in flight.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Every register of the controller.
///
/// The record is advanced only by [`ControllerState::step`]; it is never updated in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControllerState {
    /// Sequencer phase.
    pub sequencer: Sequencer,
    /// Bus lock.
    pub lock: LockState,
    /// Registered bus fields.
    pub bus: BusLatch,
    /// Shape of the last accepted request.
    pub op: RecordedOp,
    /// Tag of the last accepted request.
    pub tag: u8,
    /// A load is outstanding.
    pub read_busy: bool,
    /// Load completion pulse.
    pub valid: bool,
    /// Error pulse.
    pub error: bool,
    /// Result register.
    pub result: u32,
}

/// What happened on one tick, for logging and statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// A request was presented while busy and dropped.
    pub ignored: bool,
    /// A request was rejected as misaligned.
    pub misaligned: bool,
    /// A transaction was issued on this segment.
    pub issued: Option<Segment>,
    /// The issued transaction is a store.
    pub write: bool,
    /// The active strobe was stalled.
    pub stalled: bool,
    /// The active transaction was acknowledged.
    pub acked: bool,
    /// The active transaction was terminated by a responder error.
    pub bus_error: bool,
}

impl ControllerState {
    /// Returns the outputs driven during the current tick.
    pub fn outputs(&self, config: &ControllerConfig) -> TickOutputs {
        let active = self.sequencer.segment();
        let strobe = self.sequencer.strobe();
        let lock = if config.enable_lock {
            self.lock
        } else {
            LockState::Unlocked
        };
        TickOutputs {
            bus: BusRequest {
                claim_global: lock.claims(Segment::Global, active),
                claim_local: lock.claims(Segment::Local, active),
                strobe_global: strobe == Some(Segment::Global),
                strobe_local: strobe == Some(Segment::Local),
                write: self.bus.write,
                addr: self.bus.addr,
                data: self.bus.data,
                sel: self.bus.sel,
            },
            status: StatusOutputs {
                busy: self.sequencer.is_active(),
                read_busy: self.read_busy,
                valid: self.valid,
                error: self.error,
                tag: self.tag,
                result: self.result,
            },
        }
    }

    /// Advances the controller by one tick.
    ///
    /// # Arguments
    ///
    /// * `config` - Controller options.
    /// * `inputs` - Requester inputs sampled this tick.
    /// * `response` - Responder answer to this tick's bus outputs.
    ///
    /// # Returns
    ///
    /// The next state and the outputs driven during this tick.
    pub fn step(
        &self,
        config: &ControllerConfig,
        inputs: &RequesterInputs,
        response: &BusResponse,
    ) -> (Self, TickOutputs) {
        let (next, _) = self.transition(config, inputs, response);
        (next, self.outputs(config))
    }

    /// Computes the next state and reports what happened.
    pub fn transition(
        &self,
        config: &ControllerConfig,
        inputs: &RequesterInputs,
        response: &BusResponse,
    ) -> (Self, TickEvents) {
        let active = self.sequencer.segment();
        let mut events = TickEvents::default();

        let accepted: Option<&MemoryRequest> = match (&inputs.request, active) {
            (Some(req), None) => Some(req),
            (Some(_), Some(_)) => {
                events.ignored = true;
                None
            }
            (None, _) => None,
        };

        let misaligned = accepted.is_some_and(|req| {
            unaligned::check_alignment(config.enable_alignment_check, req.width, req.addr).is_err()
        });
        let target = accepted.and_then(|req| select_segment(config, req.addr, !misaligned));
        events.misaligned = misaligned;
        events.issued = target;
        events.write = target.is_some() && accepted.is_some_and(|req| req.write);

        let acked = active.is_some() && response.ack && !response.err;
        let bus_error = active.is_some() && response.err;
        events.acked = acked;
        events.bus_error = bus_error;
        events.stalled = self.sequencer.strobe().is_some() && response.stall && !bus_error;

        let sequencer = match (self.sequencer, target) {
            (Sequencer::Active { .. }, _) if acked || bus_error => Sequencer::Idle,
            (Sequencer::Active { segment, strobe }, _) => Sequencer::Active {
                segment,
                strobe: strobe && response.stall,
            },
            (Sequencer::Idle, Some(segment)) => Sequencer::Active {
                segment,
                strobe: true,
            },
            (Sequencer::Idle, None) => Sequencer::Idle,
        };

        let lock = self.lock.next(
            config.enable_lock,
            &LockInputs {
                requested: inputs.lock,
                active,
                issued: target,
                fault: bus_error || misaligned,
            },
        );

        let order = config.endianness();
        let fill = LaneFill::from_zero_fill(config.zero_fill_lanes);
        let bus = match (accepted, target) {
            (Some(req), Some(_)) => BusLatch::load(req, order, fill),
            (_, None) if active.is_none() && config.zero_fill_lanes => BusLatch::default(),
            _ => self.bus,
        };

        let op = accepted.map_or(self.op, |req| RecordedOp::capture(req, order));
        let tag = accepted.map_or(self.tag, |req| req.tag);

        let read_busy = if bus_error {
            false
        } else if accepted.is_some_and(|req| !req.write) && target.is_some() {
            true
        } else if self.valid {
            false
        } else {
            self.read_busy
        };

        let result = if config.zero_result_on_idle && !acked {
            0
        } else {
            self.op.decode(response.data)
        };

        let next = Self {
            sequencer,
            lock,
            bus,
            op,
            tag,
            read_busy,
            valid: acked && !self.op.write,
            error: bus_error || misaligned,
            result,
        };
        (next, events)
    }
}

/// Load/store bus controller with fixed options.
#[derive(Clone, Debug, Default)]
pub struct MemOps {
    config: ControllerConfig,
    state: ControllerState,
    stats: ControllerStats,
}

impl MemOps {
    /// Creates an idle, unlocked controller.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: ControllerState::default(),
            stats: ControllerStats::default(),
        }
    }

    /// Returns the controller options.
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Returns the current register state.
    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Returns the accumulated statistics.
    pub const fn stats(&self) -> &ControllerStats {
        &self.stats
    }

    /// Returns the outputs driven during the current tick.
    pub fn outputs(&self) -> TickOutputs {
        self.state.outputs(&self.config)
    }

    /// Returns whether a transaction is in flight.
    pub const fn is_busy(&self) -> bool {
        self.state.sequencer.is_active()
    }

    /// Advances one tick and returns the outputs driven during it.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Requester inputs sampled this tick.
    /// * `response` - Responder answer to this tick's bus outputs.
    pub fn step(&mut self, inputs: &RequesterInputs, response: &BusResponse) -> TickOutputs {
        let outputs = self.outputs();
        let (next, events) = self.state.transition(&self.config, inputs, response);
        self.log(&next, &events, inputs);
        self.stats.record(&self.state, &events);
        self.state = next;
        outputs
    }

    /// Returns to idle, dropping any lock and pending pulse.
    pub fn reset(&mut self) {
        debug!(target: "memops::ctrl", "reset");
        self.state = ControllerState::default();
    }

    fn log(&self, next: &ControllerState, events: &TickEvents, inputs: &RequesterInputs) {
        if events.ignored {
            warn!(target: "memops::ctrl", request = ?inputs.request, "request presented while busy, dropped");
        }
        if let (true, Some(req)) = (events.misaligned, &inputs.request) {
            warn!(target: "memops::ctrl", addr = %req.addr, width = %req.width, "misaligned request");
        }
        if let (Some(segment), Some(req)) = (events.issued, &inputs.request) {
            debug!(
                target: "memops::ctrl",
                %segment,
                addr = %req.addr,
                write = req.write,
                tag = req.tag,
                "issue"
            );
        }
        if events.bus_error {
            warn!(target: "memops::ctrl", addr = %ByteAddr(self.state.bus.addr), "responder error");
        }
        if events.acked {
            debug!(target: "memops::ctrl", tag = self.state.tag, "acknowledged");
        }
        match (self.state.lock, next.lock) {
            (LockState::Unlocked, LockState::Held(segment)) => {
                debug!(target: "memops::ctrl", %segment, "lock acquired");
            }
            (LockState::Held(segment), LockState::Unlocked) => {
                debug!(target: "memops::ctrl", %segment, "lock released");
            }
            _ => {}
        }
    }
}
