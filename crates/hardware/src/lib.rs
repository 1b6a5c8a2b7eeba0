//! Load/store bus controller simulator library.
//!
//! This crate models a memory-operation controller that turns load and store requests into
//! handshake transactions on a two-segment bus. It contains:
//! 1. **Core:** The transaction sequencer, lock manager, status latch, and a property checker.
//! 2. **Units:** Alignment checking, byte-lane encoding and decoding, and lock tracking.
//! 3. **SoC:** Segment interconnect and model memories with configurable handshake timing.
//! 4. **Simulation:** A tick driver that runs whole operations, plus configuration and statistics.

/// Common types and constants (addresses, widths, segments, faults).
pub mod common;
/// Controller and system configuration.
pub mod config;
/// Controller core (sequencer, pipeline signals, execution units, property checks).
pub mod core;
/// Tick driver and operation runner.
pub mod sim;
/// Bus fabric (interconnect, model memories, responder trait).
pub mod soc;
/// Controller statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse with `Config::from_json`.
pub use crate::config::Config;
/// The bus controller.
pub use crate::core::MemOps;
/// Top-level simulator; couples a controller to a `System`.
pub use crate::sim::Simulator;
/// Responders behind the controller; construct with `System::new`.
pub use crate::soc::System;
