//! Registers loaded when a request is accepted.
//!
//! A request is only visible on the tick it is presented, but its shape is needed again
//! when the responder answers one or more ticks later. These latches hold it:
//! 1. **Request Shape:** Width, byte offset, byte order, and direction, for result decoding.
//! 2. **Bus Fields:** The address, lane-placed data, and byte enables driven to the responder.

use crate::common::data::{AccessWidth, ByteOffset, Endianness};
use crate::core::pipeline::signals::MemoryRequest;
use crate::core::units::lsu::lanes::{self, LaneFill};

/// Shape of the accepted request, kept for decoding its read data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedOp {
    /// Access width.
    pub width: AccessWidth,
    /// Byte offset of the request address.
    pub offset: ByteOffset,
    /// Lane ordering in force at acceptance.
    pub order: Endianness,
    /// The request was a store.
    pub write: bool,
}

impl Default for RecordedOp {
    fn default() -> Self {
        Self {
            width: AccessWidth::Word,
            offset: ByteOffset::Zero,
            order: Endianness::Big,
            write: false,
        }
    }
}

impl RecordedOp {
    /// Records the shape of `req`.
    pub const fn capture(req: &MemoryRequest, order: Endianness) -> Self {
        Self {
            width: req.width,
            offset: req.addr.offset(),
            order,
            write: req.write,
        }
    }

    /// Extracts this operation's result from a raw bus word.
    pub const fn decode(&self, raw: u32) -> u32 {
        lanes::decode_read(self.width, self.offset, self.order, raw)
    }
}

/// Registered bus fields of the current transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusLatch {
    /// Transaction is a write.
    pub write: bool,
    /// Word-aligned byte address.
    pub addr: u32,
    /// Lane-placed write data.
    pub data: u32,
    /// Byte-enable mask.
    pub sel: u8,
}

impl BusLatch {
    /// Loads the bus fields for issuing `req`.
    pub const fn load(req: &MemoryRequest, order: Endianness, fill: LaneFill) -> Self {
        let lanes = lanes::encode_write(req.width, req.addr.offset(), order, req.data, fill);
        Self {
            write: req.write,
            addr: req.addr.word_aligned(),
            data: lanes.data,
            sel: lanes.sel,
        }
    }
}
