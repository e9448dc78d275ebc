//! # Record Decoding
//!
//! Everything that turns raw record bytes into typed rows:
//!
//! - [`layout`]: column list → fixed byte layout (offsets, record size)
//! - [`codec`]: per-type byte-span → `Value` decoding
//! - [`row`]: the decoded, ordered name→value result

pub mod codec;
pub mod layout;
pub mod row;

#[cfg(test)]
mod tests;

pub use layout::{FieldSlot, RecordLayout, RECORD_TERMINATOR_BYTES};
pub use row::Row;
