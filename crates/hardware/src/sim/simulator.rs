//! Simulator: owns the controller and the bus fabric side by side.
//!
//! Each tick the controller's registered outputs are handed to the fabric, the fabric's
//! answer is checked against the controller properties when enabled, and then the
//! controller is advanced with the requester inputs.

use tracing::trace;

use crate::common::addr::ByteAddr;
use crate::common::data::{AccessWidth, Segment};
use crate::common::error::{MemFault, SimError};
use crate::config::Config;
use crate::core::controller::MemOps;
use crate::core::monitor::PropertyChecker;
use crate::core::pipeline::signals::{MemoryRequest, RequesterInputs, TickOutputs};
use crate::soc::System;

/// Ticks an operation may take before it is abandoned.
const DEFAULT_TIMEOUT: u64 = 10_000;

/// Outcome of a successful memory operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Destination tag echoed by the controller.
    pub tag: u8,
    /// Load result; `None` for stores.
    pub value: Option<u32>,
}

/// Top-level simulator: bus controller plus the responders behind it.
#[derive(Debug)]
pub struct Simulator {
    /// The bus controller.
    pub controller: MemOps,
    /// Responders attached to the two segments.
    pub system: System,
    checker: Option<PropertyChecker>,
    timeout: u64,
    tick: u64,
}

impl Simulator {
    /// Creates a simulator with the given system and configuration.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            controller: MemOps::new(config.controller),
            system,
            checker: None,
            timeout: DEFAULT_TIMEOUT,
            tick: 0,
        }
    }

    /// Checks the controller properties on every subsequent tick.
    #[must_use]
    pub fn with_property_checks(mut self) -> Self {
        self.checker = Some(PropertyChecker::new());
        self
    }

    /// Sets the number of ticks an operation may wait before timing out.
    #[must_use]
    pub const fn with_timeout(mut self, ticks: u64) -> Self {
        self.timeout = ticks;
        self
    }

    /// Returns the number of ticks simulated.
    pub const fn ticks(&self) -> u64 {
        self.tick
    }

    /// Returns the controller outputs of the upcoming tick.
    pub fn outputs(&self) -> TickOutputs {
        self.controller.outputs()
    }

    /// Advances the simulator by one tick.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Property`] if property checks are enabled and one fails.
    pub fn tick(&mut self, inputs: &RequesterInputs) -> Result<TickOutputs, SimError> {
        let outputs = self.controller.outputs();
        let response = self.system.respond(&outputs.bus);
        trace!(
            target: "memops::sim",
            tick = self.tick,
            bus = ?outputs.bus,
            status = ?outputs.status,
            response = ?response,
        );
        if let Some(checker) = self.checker.as_mut() {
            checker.check(&outputs, &response)?;
        }
        self.tick += 1;
        Ok(self.controller.step(inputs, &response))
    }

    /// Runs `ticks` ticks with no request, holding the lock level.
    ///
    /// # Errors
    ///
    /// Propagates property violations.
    pub fn idle(&mut self, ticks: u64, lock: bool) -> Result<(), SimError> {
        for _ in 0..ticks {
            let _ = self.tick(&RequesterInputs::hold(lock))?;
        }
        Ok(())
    }

    /// Issues one request and runs until it completes.
    ///
    /// Waits for the controller to go idle first. The lock level is held at `lock` on
    /// every tick, including the completion tick.
    ///
    /// # Errors
    ///
    /// * [`SimError::Fault`] with [`MemFault::MisalignedAccess`] if the error pulse came
    ///   without a bus transaction, or [`MemFault::ResponderError`] otherwise.
    /// * [`SimError::Timeout`] if the controller stays busy too long.
    /// * [`SimError::Property`] if property checks are enabled and one fails.
    pub fn execute(&mut self, req: MemoryRequest, lock: bool) -> Result<Completion, SimError> {
        self.wait_idle(lock)?;
        let _ = self.tick(&RequesterInputs::issue(req, lock))?;

        let mut claimed: Option<Segment> = None;
        for _ in 0..self.timeout {
            let TickOutputs { bus, status } = self.tick(&RequesterInputs::hold(lock))?;
            if status.error {
                let fault = claimed.map_or(
                    MemFault::MisalignedAccess {
                        addr: req.addr,
                        width: req.width,
                    },
                    |segment| MemFault::ResponderError {
                        segment,
                        addr: req.addr,
                    },
                );
                return Err(fault.into());
            }
            if status.valid {
                return Ok(Completion {
                    tag: status.tag,
                    value: Some(status.result),
                });
            }
            if status.busy {
                claimed = claimed.or(bus.claim());
            } else if claimed.is_some() && req.write {
                return Ok(Completion {
                    tag: status.tag,
                    value: None,
                });
            }
        }
        Err(SimError::Timeout {
            ticks: self.timeout,
        })
    }

    /// Runs `reqs` back to back with the lock held, then releases it.
    ///
    /// # Errors
    ///
    /// Stops at the first failing request; the controller drops the lock on any fault.
    pub fn execute_locked(&mut self, reqs: &[MemoryRequest]) -> Result<Vec<Completion>, SimError> {
        let completions = reqs
            .iter()
            .map(|req| self.execute(*req, true))
            .collect::<Result<Vec<_>, _>>()?;
        self.idle(1, false)?;
        Ok(completions)
    }

    /// Atomically replaces the value at `addr` with `f(old)` and returns `old`.
    ///
    /// The read and the write run under one lock, so the segment stays claimed between
    /// them.
    ///
    /// # Errors
    ///
    /// Fails like [`Simulator::execute`] on either access.
    pub fn read_modify_write(
        &mut self,
        width: AccessWidth,
        addr: impl Into<ByteAddr>,
        tag: u8,
        f: impl FnOnce(u32) -> u32,
    ) -> Result<u32, SimError> {
        let addr = addr.into();
        let old = self
            .execute(MemoryRequest::read(width, addr, tag), true)?
            .value
            .unwrap_or_default();
        let _ = self.execute(MemoryRequest::write(width, addr, f(old), tag), true)?;
        self.idle(1, false)?;
        Ok(old)
    }

    /// Resets the controller, the responders, and the property history.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.system.reset();
        if let Some(checker) = self.checker.as_mut() {
            checker.reset();
        }
    }

    fn wait_idle(&mut self, lock: bool) -> Result<(), SimError> {
        for _ in 0..self.timeout {
            if !self.controller.is_busy() {
                return Ok(());
            }
            let _ = self.tick(&RequesterInputs::hold(lock))?;
        }
        Err(SimError::Timeout {
            ticks: self.timeout,
        })
    }
}
