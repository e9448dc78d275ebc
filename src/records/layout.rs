//! # Record Layout Engine
//!
//! This module turns an ordered column list into the fixed byte layout of
//! one on-disk record. Offsets are purely additive: the catalog's column
//! widths tile the record exactly, with no padding between fields, and
//! every record ends with a single terminator byte that carries no data.
//!
//! ```text
//! +----------+----------+-- ... --+----------+------------+
//! | column 1 | column 2 |         | column n | terminator |
//! +----------+----------+-- ... --+----------+------------+
//!  <-width 1-> <-width 2->          <-width n->  1 byte
//! ```

use crate::schema::ColumnDef;
use eyre::Result;

/// Bytes trailing the last field of every record. The terminator's value
/// is not interpreted; only the all-zero deleted-record check looks at it.
pub const RECORD_TERMINATOR_BYTES: usize = 1;

/// Byte position of one column within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    pub offset: usize,
    pub width: usize,
}

/// Precomputed byte layout for a table's records.
#[derive(Debug, Clone)]
pub struct RecordLayout {
    slots: Vec<FieldSlot>,
    record_size: usize,
}

impl RecordLayout {
    /// Computes the layout for columns already in `colno` order.
    ///
    /// Fails if any column's width cannot be resolved (unknown type code,
    /// invalid declared length).
    pub fn for_columns(columns: &[ColumnDef]) -> Result<Self> {
        let mut slots = Vec::with_capacity(columns.len());
        let mut offset = 0;

        for column in columns {
            let width = column.byte_width()?;
            slots.push(FieldSlot { offset, width });
            offset += width;
        }

        Ok(Self {
            slots,
            record_size: offset + RECORD_TERMINATOR_BYTES,
        })
    }

    /// Total fixed record size, terminator byte included.
    pub fn record_size(&self) -> usize {
        self.record_size
    }

    pub fn slots(&self) -> &[FieldSlot] {
        &self.slots
    }

    /// Slices one field out of a record buffer.
    pub fn field<'a>(&self, record: &'a [u8], index: usize) -> &'a [u8] {
        let slot = self.slots[index];
        &record[slot.offset..slot.offset + slot.width]
    }
}
