//! # Column Type System
//!
//! This module provides the canonical `ColumnType` enum, mirroring the
//! numeric `coltype` codes stored in the `syscolumns` catalog table.
//!
//! ## Type Codes
//!
//! | Code | Type | Stored width |
//! |------|----------|-----------------------------------|
//! | 0 | Char | `collength` bytes |
//! | 1 | SmallInt | 2 bytes, signed big-endian |
//! | 2 | Integer | 4 bytes, signed big-endian |
//! | 3 | Time | 4 bytes, seconds since midnight |
//! | 5 | Decimal | derived from packed `collength` |
//! | 6 | Serial | 4 bytes, unsigned big-endian |
//! | 7 | Date | 4 bytes, day offset from epoch |
//!
//! Code 4 is unassigned in the source format. Any code outside this table
//! is rejected; a column carrying one surfaces an error at decode time
//! rather than being silently read as bytes.

use eyre::bail;

/// Canonical column type enum over the on-disk `coltype` codes.
///
/// The discriminants match the catalog encoding exactly, so a `ColumnType`
/// can be stored and compared as its raw code.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Char = 0,
    SmallInt = 1,
    Integer = 2,
    Time = 3,
    Decimal = 5,
    Serial = 6,
    Date = 7,
}

impl ColumnType {
    /// Returns the raw catalog code for this type.
    pub fn code(self) -> i16 {
        self as i16
    }

    /// Returns true if values of this type decode to text.
    pub fn is_character(self) -> bool {
        matches!(self, ColumnType::Char)
    }

    /// Returns true if values of this type decode to integers.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            ColumnType::SmallInt | ColumnType::Integer | ColumnType::Serial
        )
    }
}

impl TryFrom<i16> for ColumnType {
    type Error = eyre::Report;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColumnType::Char),
            1 => Ok(ColumnType::SmallInt),
            2 => Ok(ColumnType::Integer),
            3 => Ok(ColumnType::Time),
            5 => Ok(ColumnType::Decimal),
            6 => Ok(ColumnType::Serial),
            7 => Ok(ColumnType::Date),
            _ => bail!("unsupported column type code: {}", value),
        }
    }
}
