//! # Storage Layer
//!
//! File access for table data. The on-disk format is deliberately dumb
//! (fixed-size records, no headers, no pages), so the whole layer is one
//! sequential scanner.

pub mod table_file;

pub use table_file::{read_rows, ReadOptions};
