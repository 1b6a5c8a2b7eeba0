//! Controller statistics collection and reporting.
//!
//! This module tracks activity counters for the bus controller. It provides:
//! 1. **Ticks:** Total ticks and ticks spent busy, stalled, or holding a lock.
//! 2. **Transactions:** Reads and writes issued, split by segment.
//! 3. **Faults:** Misaligned requests, responder errors, and requests dropped while busy.

use std::fmt;

use crate::common::data::Segment;
use crate::core::controller::{ControllerState, TickEvents};
use crate::core::units::lsu::lock::LockState;

/// Activity counters for one controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControllerStats {
    /// Total ticks stepped.
    pub ticks: u64,
    /// Ticks with a transaction in flight.
    pub busy_ticks: u64,
    /// Ticks on which the offered strobe was stalled.
    pub stall_ticks: u64,
    /// Ticks on which a lock was held.
    pub locked_ticks: u64,

    /// Load transactions issued.
    pub reads: u64,
    /// Store transactions issued.
    pub writes: u64,
    /// Transactions issued on the global segment.
    pub global_transactions: u64,
    /// Transactions issued on the local segment.
    pub local_transactions: u64,
    /// Transactions acknowledged.
    pub acks: u64,

    /// Requests rejected as misaligned.
    pub misaligned: u64,
    /// Transactions terminated by a responder error.
    pub bus_errors: u64,
    /// Requests presented while busy and dropped.
    pub ignored_requests: u64,
}

impl ControllerStats {
    /// Accumulates one tick.
    ///
    /// # Arguments
    ///
    /// * `state` - Controller state at the start of the tick.
    /// * `events` - What the tick did.
    pub fn record(&mut self, state: &ControllerState, events: &TickEvents) {
        self.ticks += 1;
        self.busy_ticks += u64::from(state.sequencer.is_active());
        self.stall_ticks += u64::from(events.stalled);
        self.locked_ticks += u64::from(state.lock != LockState::Unlocked);

        if let Some(segment) = events.issued {
            match segment {
                Segment::Global => self.global_transactions += 1,
                Segment::Local => self.local_transactions += 1,
            }
            if events.write {
                self.writes += 1;
            } else {
                self.reads += 1;
            }
        }
        self.acks += u64::from(events.acked);
        self.misaligned += u64::from(events.misaligned);
        self.bus_errors += u64::from(events.bus_error);
        self.ignored_requests += u64::from(events.ignored);
    }

    /// Returns the total number of transactions issued.
    pub const fn transactions(&self) -> u64 {
        self.global_transactions + self.local_transactions
    }

    /// Returns the fraction of ticks spent busy, in percent.
    pub fn utilization(&self) -> f64 {
        let ticks = self.ticks.max(1);
        (self.busy_ticks as f64 / ticks as f64) * 100.0
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for ControllerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "BUS CONTROLLER STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "ticks                    {}", self.ticks)?;
        writeln!(
            f,
            "ticks.busy               {} ({:.2}%)",
            self.busy_ticks,
            self.utilization()
        )?;
        writeln!(f, "ticks.stalled            {}", self.stall_ticks)?;
        writeln!(f, "ticks.locked             {}", self.locked_ticks)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "TRANSACTIONS")?;
        writeln!(f, "  op.read                {}", self.reads)?;
        writeln!(f, "  op.write               {}", self.writes)?;
        writeln!(f, "  segment.global         {}", self.global_transactions)?;
        writeln!(f, "  segment.local          {}", self.local_transactions)?;
        writeln!(f, "  acks                   {}", self.acks)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "FAULTS")?;
        writeln!(f, "  misaligned             {}", self.misaligned)?;
        writeln!(f, "  bus_errors             {}", self.bus_errors)?;
        write!(f, "  ignored_requests       {}", self.ignored_requests)
    }
}
