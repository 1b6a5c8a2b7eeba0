/// Byte address field extraction.
pub mod addr;
