//! Common types used throughout the controller model.
//!
//! This module provides the building blocks shared by every unit. It includes:
//! 1. **Address Types:** A strong type for requester byte addresses.
//! 2. **Constants:** Bus geometry, lane masks, and the local aperture marker.
//! 3. **Access Types:** Widths, byte offsets, segments, and byte order.
//! 4. **Error Handling:** Memory faults and per-tick property violations.

/// Requester byte address type.
pub mod addr;

/// Bus-wide constants.
pub mod constants;

/// Access width, byte offset, segment, and endianness enumerations.
pub mod data;

/// Fault and property-violation types.
pub mod error;

pub use addr::ByteAddr;
pub use data::{AccessWidth, ByteOffset, Endianness, Segment};
pub use error::{MemFault, PropertyViolation, SimError};
