//! Controller datapath records.
//!
//! Signal bundles on both interfaces and the registers loaded at request acceptance.

/// Registers loaded when a request is accepted.
pub mod latches;

/// Requester- and responder-facing signal bundles.
pub mod signals;
