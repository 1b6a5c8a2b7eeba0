//! System-on-Chip Components.
//!
//! The bus fabric behind the controller: segment decode and routing, the responder
//! trait, model memories, and the builder that assembles them.

/// System builder.
pub mod builder;

/// Segment decode and response routing.
pub mod interconnect;

/// Model memories and their timing.
pub mod memory;

/// Responder trait for bus targets.
pub mod traits;

pub use builder::System;
