//! Byte-lane placement and extraction.
//!
//! This module maps a (width, byte offset, byte order) triple onto the four byte lanes of
//! the bus word. It provides:
//! 1. **Lane Table:** The single source of truth for lane selection and bit position.
//! 2. **Encoder:** Write payload placement plus the byte-enable mask.
//! 3. **Decoder:** Extraction and zero-extension of read data.
//!
//! Extraction position is selection position, so a payload written through
//! [`encode_write`] reads back unchanged through [`decode_read`] with the same parameters.
//!
//! Big-endian halfwords use the same lanes as little-endian halfwords (offset `1x` selects
//! bits 31:16). Byte lanes are mirrored between the two orders.

use crate::common::constants::{SEL_ALL, SEL_LOWER_HALF, SEL_UPPER_HALF};
use crate::common::data::{AccessWidth, ByteOffset, Endianness};

/// How unselected write lanes are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LaneFill {
    /// Replicate the payload into every lane.
    #[default]
    Duplicate,

    /// Drive unselected lanes to zero.
    Zero,
}

impl LaneFill {
    /// Selects the fill mode from the controller's low-power option.
    pub const fn from_zero_fill(zero_fill: bool) -> Self {
        if zero_fill { Self::Zero } else { Self::Duplicate }
    }
}

/// Location of an access within the bus word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneSlot {
    /// Byte-enable mask; bit 3 selects data bits 31:24, bit 0 selects bits 7:0.
    pub sel: u8,
    /// Bit position of the least significant payload bit.
    pub shift: u32,
}

impl LaneSlot {
    const fn new(sel: u8, shift: u32) -> Self {
        Self { sel, shift }
    }
}

/// Lane-placed write data and its byte enables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaneWrite {
    /// Full-width word driven onto the data bus.
    pub data: u32,
    /// Byte-enable mask.
    pub sel: u8,
}

/// Looks up the lanes touched by an access.
///
/// Word accesses ignore `offset`; with alignment checking disabled, halfwords ignore bit 0.
pub const fn lane_slot(width: AccessWidth, offset: ByteOffset, order: Endianness) -> LaneSlot {
    use ByteOffset::{One, Three, Two, Zero};
    match (width, order, offset) {
        (AccessWidth::Word, _, _) => LaneSlot::new(SEL_ALL, 0),

        (AccessWidth::Half, _, Zero | One) => LaneSlot::new(SEL_LOWER_HALF, 0),
        (AccessWidth::Half, _, Two | Three) => LaneSlot::new(SEL_UPPER_HALF, 16),

        (AccessWidth::Byte, Endianness::Big, Zero) => LaneSlot::new(0b1000, 24),
        (AccessWidth::Byte, Endianness::Big, One) => LaneSlot::new(0b0100, 16),
        (AccessWidth::Byte, Endianness::Big, Two) => LaneSlot::new(0b0010, 8),
        (AccessWidth::Byte, Endianness::Big, Three) => LaneSlot::new(0b0001, 0),

        (AccessWidth::Byte, Endianness::Little, Zero) => LaneSlot::new(0b0001, 0),
        (AccessWidth::Byte, Endianness::Little, One) => LaneSlot::new(0b0010, 8),
        (AccessWidth::Byte, Endianness::Little, Two) => LaneSlot::new(0b0100, 16),
        (AccessWidth::Byte, Endianness::Little, Three) => LaneSlot::new(0b1000, 24),
    }
}

/// Places a natural-width write payload onto the bus lanes.
///
/// # Arguments
///
/// * `width` - Access width; payload bits above it are ignored.
/// * `offset` - Byte offset of the request address.
/// * `order` - Bus byte order.
/// * `payload` - Write value, right-aligned.
/// * `fill` - Content of the lanes the access does not select.
pub const fn encode_write(
    width: AccessWidth,
    offset: ByteOffset,
    order: Endianness,
    payload: u32,
    fill: LaneFill,
) -> LaneWrite {
    let slot = lane_slot(width, offset, order);
    let value = payload & width.payload_mask();
    let data = match (width, fill) {
        (AccessWidth::Word, _) => value,
        (_, LaneFill::Zero) => value << slot.shift,
        (AccessWidth::Half, LaneFill::Duplicate) => value | (value << 16),
        (AccessWidth::Byte, LaneFill::Duplicate) => value * 0x0101_0101,
    };
    LaneWrite {
        data,
        sel: slot.sel,
    }
}

/// Extracts the addressed sub-field of a read word, zero-extended.
///
/// # Arguments
///
/// * `width` - Access width recorded at acceptance.
/// * `offset` - Byte offset recorded at acceptance.
/// * `order` - Bus byte order.
/// * `raw` - Full-width word returned by the responder.
pub const fn decode_read(
    width: AccessWidth,
    offset: ByteOffset,
    order: Endianness,
    raw: u32,
) -> u32 {
    let slot = lane_slot(width, offset, order);
    (raw >> slot.shift) & width.payload_mask()
}
