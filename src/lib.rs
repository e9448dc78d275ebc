//! # MultiBase - Legacy ISAM Table Reader
//!
//! `multibase` reads the on-disk tables of a legacy MultiBase/Informix-style
//! ISAM database: a directory of `.dat` files, each a flat sequence of
//! fixed-width big-endian records. There is no external schema file; the
//! schema lives in two catalog tables (`systables`, `syscolumns`) that the
//! reader decodes with compiled-in layouts before anything else.
//!
//! ## Quick Start
//!
//! ```ignore
//! use multibase::Database;
//!
//! let db = Database::open("./accounting.dbs")?;
//!
//! for name in db.table_names()? {
//!     println!("{}", name);
//! }
//!
//! for row in db.read_table("orders")? {
//!     println!("{:?}", row.get("order_id"));
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      Public API (Database)          │
//! ├─────────────────────────────────────┤
//! │  Catalog Discovery │ Schema Map     │
//! ├─────────────────────────────────────┤
//! │      Table File Scanner             │
//! ├─────────────────────────────────────┤
//! │  Record Layout │ Field Codecs       │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## File Layout
//!
//! ```text
//! database_dir/
//! ├── systables.dat    # Catalog: one row per table
//! ├── syscolumns.dat   # Catalog: one row per column
//! ├── orders.dat       # Ordinary table data
//! └── customers.dat
//! ```
//!
//! Every record is the concatenation of its columns' fixed-width
//! encodings plus one trailing terminator byte. An all-zero record is a
//! deleted row; a short chunk at end-of-file is a truncated write. Both
//! are skipped silently.
//!
//! ## Module Overview
//!
//! - [`types`]: column type codes and runtime values
//! - [`records`]: byte layout, field codecs, decoded rows
//! - [`schema`]: table metadata, catalog map, discovery protocol
//! - [`storage`]: the sequential `.dat` file scanner
//! - [`database`]: the public reader and its builder

pub mod database;
pub mod records;
pub mod schema;
pub mod storage;
pub mod types;

pub use database::{Database, DatabaseBuilder};
pub use records::Row;
pub use schema::{Catalog, ColumnDef, TableDef};
pub use storage::ReadOptions;
pub use types::{CalendarDate, ClockTime, ColumnType, Value};
