//! Byte address Unit Tests.
//!
//! Verifies offset, top-byte, and word-alignment extraction.

use memops_core::common::{AccessWidth, ByteAddr, ByteOffset};

#[test]
fn offset_is_low_two_bits() {
    for (addr, offset) in [
        (0x1000u32, ByteOffset::Zero),
        (0x1001, ByteOffset::One),
        (0x1002, ByteOffset::Two),
        (0xFFFF_FFFF, ByteOffset::Three),
    ] {
        assert_eq!(ByteAddr(addr).offset(), offset, "addr={addr:#x}");
    }
}

#[test]
fn top_byte_selects_bits_31_to_24() {
    assert_eq!(ByteAddr(0xFF00_0000).top_byte(), 0xFF);
    assert_eq!(ByteAddr(0xFEFF_FFFF).top_byte(), 0xFE);
    assert_eq!(ByteAddr(0x00FF_FFFF).top_byte(), 0x00);
}

#[test]
fn offset_bits_round_trip() {
    let addr = ByteAddr(0x1237);
    assert_eq!(addr.val(), 0x1237);
    assert_eq!(addr.offset().bits(), 3);
    assert_eq!(ByteOffset::from_addr(addr.offset().bits()), ByteOffset::Three);
}

#[test]
fn word_aligned_clears_offset() {
    assert_eq!(ByteAddr(0x1237).word_aligned(), 0x1234);
    assert_eq!(ByteAddr(0x1234).word_aligned(), 0x1234);
}

#[test]
fn display_is_zero_padded_hex() {
    assert_eq!(ByteAddr(0x100).to_string(), "0x00000100");
}

#[test]
fn width_sizes_and_masks() {
    assert_eq!(AccessWidth::Byte.bytes(), 1);
    assert_eq!(AccessWidth::Half.bytes(), 2);
    assert_eq!(AccessWidth::Word.bytes(), 4);
    assert_eq!(AccessWidth::Half.payload_mask(), 0xFFFF);
}
