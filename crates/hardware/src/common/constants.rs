//! Global Bus Constants.
//!
//! This module defines bus-wide constants used across the controller. It includes:
//! 1. **Bus Geometry:** Data width, lane count, and the byte-offset mask.
//! 2. **Lane Masks:** Byte-enable patterns for full, halfword, and byte accesses.
//! 3. **Address Decode:** The top-byte marker of the local-bus aperture.

/// Width of the bus data path in bits.
pub const BUS_WIDTH_BITS: u32 = 32;

/// Number of byte lanes on the bus.
pub const BYTE_LANES: u32 = BUS_WIDTH_BITS / 8;

/// Mask for extracting the byte offset within a bus word.
pub const BYTE_OFFSET_MASK: u32 = 0x3;

/// Mask for clearing the byte offset to form a word-aligned bus address.
pub const WORD_ADDR_MASK: u32 = !BYTE_OFFSET_MASK;

/// Shift that exposes the top address byte.
pub const TOP_BYTE_SHIFT: u32 = 24;

/// Default top-byte value selecting the local segment (`0xFFxx_xxxx`).
pub const LOCAL_APERTURE: u8 = 0xFF;

/// Byte-enable mask with every lane selected.
pub const SEL_ALL: u8 = 0b1111;

/// Byte-enable mask for the upper halfword (data bits 31:16).
pub const SEL_UPPER_HALF: u8 = 0b1100;

/// Byte-enable mask for the lower halfword (data bits 15:0).
pub const SEL_LOWER_HALF: u8 = 0b0011;

/// Mask of the payload bits carried by a byte access.
pub const BYTE_MASK: u32 = 0x0000_00FF;

/// Mask of the payload bits carried by a halfword access.
pub const HALF_MASK: u32 = 0x0000_FFFF;
