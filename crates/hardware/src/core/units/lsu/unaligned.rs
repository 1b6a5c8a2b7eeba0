//! Alignment checking.
//!
//! Decides, from the current request alone, whether an access violates the natural
//! alignment rule. In-flight state is never consulted.

use crate::common::addr::ByteAddr;
use crate::common::data::{AccessWidth, ByteOffset};
use crate::common::error::MemFault;

/// Returns `true` if an access of `width` at byte `offset` is misaligned.
///
/// Words require offset `00`; halfwords require bit 0 clear; bytes are always aligned.
///
/// # Arguments
///
/// * `width` - Requested access width.
/// * `offset` - Byte offset (address bits 1:0).
pub const fn is_misaligned(width: AccessWidth, offset: ByteOffset) -> bool {
    match (width, offset) {
        (AccessWidth::Byte, _)
        | (AccessWidth::Half, ByteOffset::Zero | ByteOffset::Two)
        | (AccessWidth::Word, ByteOffset::Zero) => false,
        (AccessWidth::Half, ByteOffset::One | ByteOffset::Three)
        | (AccessWidth::Word, ByteOffset::One | ByteOffset::Two | ByteOffset::Three) => true,
    }
}

/// Applies the alignment rule when checking is enabled.
///
/// With checking disabled every request passes and the lane tables ignore the offending
/// low bits.
///
/// # Errors
///
/// Returns [`MemFault::MisalignedAccess`] if `enabled` and the access is misaligned.
pub const fn check_alignment(
    enabled: bool,
    width: AccessWidth,
    addr: ByteAddr,
) -> Result<(), MemFault> {
    if enabled && is_misaligned(width, addr.offset()) {
        Err(MemFault::MisalignedAccess { addr, width })
    } else {
        Ok(())
    }
}
