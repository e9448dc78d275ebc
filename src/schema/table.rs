//! # Table Definition Module
//!
//! Immutable metadata describing one table of the database: its name, the
//! `.dat` file backing it, and its ordered column list.
//!
//! ## Column Ordering
//!
//! The byte layout of a record is governed by `colno`, the 1-based sequence
//! number each column carries in the `syscolumns` catalog, not by the
//! order rows happen to come off disk. `TableDef::new` therefore sorts its
//! columns by `colno` at construction, and every downstream consumer may
//! rely on that order.
//!
//! ## Deferred Type Resolution
//!
//! `ColumnDef` keeps the raw `coltype` code from the catalog. Resolving it
//! to a `ColumnType` can fail (the code set is closed), and discovery must
//! stay permissive: one exotic column in one table must not poison the
//! whole catalog. Resolution happens when a byte width or a decode is
//! actually requested, and the error names the offending column.

use crate::types::ColumnType;
use eyre::{ensure, Result, WrapErr};

/// Definition of a single column: name, layout position, raw type code and
/// declared length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    name: String,
    colno: i16,
    type_code: i16,
    length: i16,
}

impl ColumnDef {
    /// Creates a column with a known type. Used for the compiled-in
    /// catalog layouts.
    pub fn new(name: impl Into<String>, colno: i16, column_type: ColumnType, length: i16) -> Self {
        Self {
            name: name.into(),
            colno,
            type_code: column_type.code(),
            length,
        }
    }

    /// Creates a column from raw catalog values, deferring type-code
    /// validation until the column is used.
    pub fn from_catalog(name: impl Into<String>, colno: i16, type_code: i16, length: i16) -> Self {
        Self {
            name: name.into(),
            colno,
            type_code,
            length,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based position of this column in the record byte layout.
    pub fn colno(&self) -> i16 {
        self.colno
    }

    /// Raw `coltype` code as stored in the catalog.
    pub fn type_code(&self) -> i16 {
        self.type_code
    }

    /// Declared `collength` value. For Char this is the byte width; for
    /// Decimal it packs the digit counts before/after the point.
    pub fn length(&self) -> i16 {
        self.length
    }

    /// Resolves the raw type code, naming this column on failure.
    pub fn column_type(&self) -> Result<ColumnType> {
        ColumnType::try_from(self.type_code)
            .wrap_err_with(|| format!("column '{}' cannot be decoded", self.name))
    }

    /// Fixed byte width of this column's on-disk encoding.
    pub fn byte_width(&self) -> Result<usize> {
        let width = match self.column_type()? {
            ColumnType::Char => {
                ensure!(
                    self.length > 0,
                    "column '{}' has invalid char length {}",
                    self.name,
                    self.length
                );
                self.length as usize
            }
            ColumnType::SmallInt => 2,
            ColumnType::Integer => 4,
            ColumnType::Serial => 4,
            ColumnType::Date => 4,
            ColumnType::Time => 4,
            ColumnType::Decimal => {
                let (before, after) = self.decimal_digits();
                ensure!(
                    before + after > 0,
                    "column '{}' has invalid decimal length {}",
                    self.name,
                    self.length
                );
                (before + after).div_ceil(2)
            }
        };
        Ok(width)
    }

    /// Unpacks a Decimal `collength`: high byte is the digit count before
    /// the point, low byte the digit count after it.
    pub fn decimal_digits(&self) -> (usize, usize) {
        let packed = self.length as u16;
        ((packed >> 8) as usize, (packed & 0xFF) as usize)
    }
}

/// Definition of one table: its catalog identity, backing file and ordered
/// columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    name: String,
    file_name: String,
    table_id: u32,
    columns: Vec<ColumnDef>,
}

impl TableDef {
    pub fn new(
        name: impl Into<String>,
        file_name: impl Into<String>,
        table_id: u32,
        mut columns: Vec<ColumnDef>,
    ) -> Self {
        columns.sort_by_key(|c| c.colno());
        Self {
            name: name.into(),
            file_name: file_name.into(),
            table_id,
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the `.dat` file backing this table, relative to the
    /// database directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn table_id(&self) -> u32 {
        self.table_id
    }

    /// Columns in ascending `colno` order.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_def_sorts_columns_by_colno() {
        let table = TableDef::new(
            "orders",
            "orders.dat",
            7,
            vec![
                ColumnDef::new("name", 2, ColumnType::Char, 10),
                ColumnDef::new("id", 1, ColumnType::Integer, 4),
            ],
        );

        assert_eq!(table.columns()[0].name(), "id");
        assert_eq!(table.columns()[1].name(), "name");
    }

    #[test]
    fn fixed_type_widths() {
        let cases = [
            (ColumnType::SmallInt, 2usize),
            (ColumnType::Integer, 4),
            (ColumnType::Serial, 4),
            (ColumnType::Date, 4),
            (ColumnType::Time, 4),
        ];
        for (ty, expected) in cases {
            let col = ColumnDef::new("c", 1, ty, 4);
            assert_eq!(col.byte_width().unwrap(), expected);
        }
    }

    #[test]
    fn char_width_follows_declared_length() {
        let col = ColumnDef::new("tabname", 1, ColumnType::Char, 18);
        assert_eq!(col.byte_width().unwrap(), 18);
    }

    #[test]
    fn decimal_width_derives_from_packed_length() {
        // 6 digits before the point, 2 after: ceil(8 / 2) = 4 bytes.
        let col = ColumnDef::new("price", 1, ColumnType::Decimal, 0x0602);
        assert_eq!(col.decimal_digits(), (6, 2));
        assert_eq!(col.byte_width().unwrap(), 4);

        // Odd total digit count rounds up.
        let col = ColumnDef::new("rate", 1, ColumnType::Decimal, 0x0302);
        assert_eq!(col.byte_width().unwrap(), 3);
    }

    #[test]
    fn unknown_type_code_errors_name_the_column() {
        let col = ColumnDef::from_catalog("mystery", 1, 9, 4);
        let err = col.byte_width().unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("mystery"));
        assert!(msg.contains("unsupported column type code: 9"));
    }
}
