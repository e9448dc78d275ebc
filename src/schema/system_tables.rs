//! # System Tables Module
//!
//! This module defines the compiled-in layouts of the two catalog tables,
//! `systables` and `syscolumns`. Every other table's schema is discovered
//! by reading these two, which means their own layouts can never be
//! discovered and must ship with the reader.
//!
//! ## Bootstrap Layouts
//!
//! `systables`, one row per table:
//!
//! | # | Column | Type | Length |
//! |---|---------|--------|--------|
//! | 1 | tabname | Char | 18 |
//! | 2 | owner | Char | 8 |
//! | 3 | dirpath | Char | 64 |
//! | 4 | tabid | Serial | 4 |
//! | 5 | rest | Char | 37 |
//!
//! `syscolumns`, one row per column of every table:
//!
//! | # | Column | Type | Length |
//! |---|-----------|----------|--------|
//! | 1 | colname | Char | 18 |
//! | 2 | tabid | Serial | 4 |
//! | 3 | colno | SmallInt | 2 |
//! | 4 | coltype | SmallInt | 2 |
//! | 5 | collength | SmallInt | 2 |
//!
//! The catalog discovered from disk replaces these seeds; a healthy
//! database describes its own catalog tables, and the discovered
//! definitions win.

use super::table::{ColumnDef, TableDef};
use crate::types::ColumnType;

/// Name of the table-of-tables catalog table.
pub const SYSTABLES: &str = "systables";

/// Name of the column catalog table.
pub const SYSCOLUMNS: &str = "syscolumns";

/// Extension shared by every table data file.
pub const TABLE_FILE_EXTENSION: &str = "dat";

/// Catalog table ids of the two system tables.
pub const SYSTABLES_TABLE_ID: u32 = 1;
pub const SYSCOLUMNS_TABLE_ID: u32 = 2;

/// Builds the backing filename for a table from its `dirpath` value.
pub fn table_file_name(dirpath: &str) -> String {
    format!("{}.{}", dirpath, TABLE_FILE_EXTENSION)
}

/// Compiled-in column layout of `systables`.
pub fn systables_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("tabname", 1, ColumnType::Char, 18),
        ColumnDef::new("owner", 2, ColumnType::Char, 8),
        ColumnDef::new("dirpath", 3, ColumnType::Char, 64),
        ColumnDef::new("tabid", 4, ColumnType::Serial, 4),
        ColumnDef::new("rest", 5, ColumnType::Char, 37),
    ]
}

/// Compiled-in column layout of `syscolumns`.
pub fn syscolumns_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("colname", 1, ColumnType::Char, 18),
        ColumnDef::new("tabid", 2, ColumnType::Serial, 4),
        ColumnDef::new("colno", 3, ColumnType::SmallInt, 2),
        ColumnDef::new("coltype", 4, ColumnType::SmallInt, 2),
        ColumnDef::new("collength", 5, ColumnType::SmallInt, 2),
    ]
}

pub fn systables_def() -> TableDef {
    TableDef::new(
        SYSTABLES,
        table_file_name(SYSTABLES),
        SYSTABLES_TABLE_ID,
        systables_columns(),
    )
}

pub fn syscolumns_def() -> TableDef {
    TableDef::new(
        SYSCOLUMNS,
        table_file_name(SYSCOLUMNS),
        SYSCOLUMNS_TABLE_ID,
        syscolumns_columns(),
    )
}
