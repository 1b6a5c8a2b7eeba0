//! Requester byte addresses.
//!
//! This module defines a strong type for the byte addresses the CPU presents to the
//! controller. It provides the following:
//! 1. **Type Safety:** Keeps requester byte addresses apart from raw bus words.
//! 2. **Field Extraction:** Byte offset (bits 1:0) and top byte (bits 31:24) for decode.
//! 3. **Bus Conversion:** The word-aligned address driven onto the bus.

use std::fmt;

use super::constants::{TOP_BYTE_SHIFT, WORD_ADDR_MASK};
use super::data::ByteOffset;

/// A byte address as issued by the requester.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteAddr(pub u32);

impl ByteAddr {
    /// Returns the raw 32-bit address value.
    #[inline]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Returns the position of the addressed byte within its bus word.
    #[inline]
    pub const fn offset(self) -> ByteOffset {
        ByteOffset::from_addr(self.0)
    }

    /// Returns address bits 31:24, used for aperture decoding.
    #[inline]
    pub const fn top_byte(self) -> u8 {
        (self.0 >> TOP_BYTE_SHIFT) as u8
    }

    /// Returns the word-aligned address driven onto the bus.
    #[inline]
    pub const fn word_aligned(self) -> u32 {
        self.0 & WORD_ADDR_MASK
    }
}

impl From<u32> for ByteAddr {
    fn from(addr: u32) -> Self {
        Self(addr)
    }
}

impl fmt::Display for ByteAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
