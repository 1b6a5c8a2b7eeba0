//! Load/Store Unit (LSU).
//!
//! The combinational helpers and the lock state used by the bus controller:
//! - [`unaligned`]: Alignment checking.
//! - [`lanes`]: Byte-lane placement of write data and extraction of read data.
//! - [`lock`]: Bus lock held across consecutive transactions.

/// Alignment checker.
pub mod unaligned;

/// Byte-lane encoder and result decoder.
pub mod lanes;

/// Cross-transaction lock manager.
pub mod lock;

pub use lanes::{LaneFill, LaneSlot, LaneWrite, decode_read, encode_write, lane_slot};
pub use lock::{LockInputs, LockState};
pub use unaligned::{check_alignment, is_misaligned};
