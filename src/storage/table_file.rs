//! # Table File Scanner
//!
//! Reads one table's `.dat` file: a flat sequence of fixed-size records
//! with no file header, no page structure and no index. The scanner walks
//! the file in non-overlapping record-size chunks and classifies each one:
//!
//! | Chunk | Handling |
//! |------------------------------|---------------------------------|
//! | full-size, any non-zero byte | decoded into a `Row` |
//! | full-size, all zero bytes | deleted record, skipped |
//! | shorter than a record | truncated tail, scan ends |
//!
//! Both skip cases are expected storage conditions, not errors. Rows come
//! back in on-disk order; nothing is cached between calls, and the file
//! handle is released on every exit path.

use crate::records::{codec, RecordLayout, Row};
use crate::schema::TableDef;
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::trace;

/// Per-read settings.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// Strip trailing padding from Char fields.
    pub trim_char_padding: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            trim_char_padding: true,
        }
    }
}

/// Decodes every live record of `table` from the file at `path`.
pub fn read_rows(path: &Path, table: &TableDef, options: &ReadOptions) -> Result<Vec<Row>> {
    let layout = RecordLayout::for_columns(table.columns())
        .wrap_err_with(|| format!("cannot lay out records of table '{}'", table.name()))?;

    let file = File::open(path)
        .wrap_err_with(|| format!("cannot open table file '{}'", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut chunk = vec![0u8; layout.record_size()];
    let mut rows = Vec::new();
    let mut deleted = 0usize;

    loop {
        let filled = fill_chunk(&mut reader, &mut chunk)
            .wrap_err_with(|| format!("cannot read table file '{}'", path.display()))?;
        if filled == 0 {
            break;
        }
        if filled < chunk.len() {
            // Truncated tail: the final record was never fully written.
            break;
        }
        if chunk.iter().all(|&byte| byte == 0) {
            deleted += 1;
            continue;
        }
        rows.push(decode_record(&chunk, table, &layout, options)?);
    }

    trace!(
        table = table.name(),
        rows = rows.len(),
        deleted,
        "scanned table file"
    );
    Ok(rows)
}

/// Reads until `chunk` is full or the file ends; returns the bytes read.
fn fill_chunk(reader: &mut impl Read, chunk: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < chunk.len() {
        match reader.read(&mut chunk[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

fn decode_record(
    chunk: &[u8],
    table: &TableDef,
    layout: &RecordLayout,
    options: &ReadOptions,
) -> Result<Row> {
    let mut row = Row::with_capacity(table.column_count());
    for (index, column) in table.columns().iter().enumerate() {
        let value = codec::decode_field(
            column,
            layout.field(chunk, index),
            options.trim_char_padding,
        )
        .wrap_err_with(|| format!("while decoding table '{}'", table.name()))?;
        row.push(column.name().to_string(), value);
    }
    Ok(row)
}
