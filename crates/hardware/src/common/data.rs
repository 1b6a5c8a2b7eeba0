//! Memory Access Types.
//!
//! This module defines the small enumerations every stage of the controller is keyed on:
//! 1. **Access Width:** Byte, halfword, or word requests from the CPU.
//! 2. **Byte Offset:** The two low address bits, as a closed set for exhaustive lane tables.
//! 3. **Segment:** Which of the two bus segments a transaction targets.
//! 4. **Endianness:** Which end of the bus word the lowest address maps to.

use std::fmt;

use serde::Deserialize;

use super::constants::{BYTE_MASK, HALF_MASK};

/// Width of a requested memory operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AccessWidth {
    /// 8-bit byte access; never misaligned.
    Byte,

    /// 16-bit halfword access; requires address bit 0 clear.
    Half,

    /// 32-bit word access; requires both low address bits clear.
    Word,
}

impl AccessWidth {
    /// Returns the number of bytes moved by an access of this width.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Returns the mask of payload bits meaningful at this width.
    pub const fn payload_mask(self) -> u32 {
        match self {
            Self::Byte => BYTE_MASK,
            Self::Half => HALF_MASK,
            Self::Word => u32::MAX,
        }
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte => write!(f, "byte"),
            Self::Half => write!(f, "halfword"),
            Self::Word => write!(f, "word"),
        }
    }
}

/// Byte position of an address within its bus word (address bits 1:0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOffset {
    /// Low bits `00`.
    #[default]
    Zero,
    /// Low bits `01`.
    One,
    /// Low bits `10`.
    Two,
    /// Low bits `11`.
    Three,
}

impl ByteOffset {
    /// Decodes the byte offset from the two low bits of `addr`.
    pub const fn from_addr(addr: u32) -> Self {
        match addr & 0b11 {
            0 => Self::Zero,
            1 => Self::One,
            2 => Self::Two,
            _ => Self::Three,
        }
    }

    /// Returns the offset as its raw two-bit value.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// All four offsets in address order.
    pub const ALL: [Self; 4] = [Self::Zero, Self::One, Self::Two, Self::Three];
}

/// One of the two independently claimable bus segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Segment {
    /// The main system bus.
    Global,

    /// The local bus, reached through the top-byte aperture.
    Local,
}

impl Segment {
    /// Returns the other segment.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Global => Self::Local,
            Self::Local => Self::Global,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Byte ordering of the bus word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Lowest address maps to data bits 31:24.
    #[default]
    Big,

    /// Lowest address maps to data bits 7:0.
    Little,
}
