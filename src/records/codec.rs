//! # Field Codecs
//!
//! Pure functions decoding one raw byte span into a typed `Value`, given
//! the owning column's declared type and length. The record layout engine
//! guarantees every span has the exact declared width; the codecs validate
//! it anyway so a bad slice fails loudly instead of misreading.
//!
//! ## Encodings
//!
//! | Type | Encoding |
//! |----------|-----------------------------------------------------|
//! | Char | Latin-1 bytes, right-padded; padding trimmed on read |
//! | SmallInt | 2-byte signed big-endian |
//! | Integer | 4-byte signed big-endian |
//! | Serial | 4-byte unsigned big-endian |
//! | Date | 4-byte signed BE day offset from 1899-12-31 |
//! | Time | 4-byte unsigned BE seconds since midnight |
//! | Decimal | header byte + base-100 digit pairs (excess-100) |
//!
//! ## Packed Decimal
//!
//! The header byte carries the sign (values above 127 are positive) and,
//! in its low nibble, half the decimal-point position within the decoded
//! digit string. Each following byte is one base-100 digit pair; negative
//! values store `100 - pair` so that raw byte order still sorts by
//! numeric value.

use crate::schema::ColumnDef;
use crate::types::{CalendarDate, ClockTime, ColumnType, Value};
use eyre::{ensure, Result, WrapErr};
use smallvec::SmallVec;

/// Raw 4-byte pattern marking a null date.
const DATE_NULL_SENTINEL: u32 = 0x8000_0000;

/// Day offsets at or past this limit are corrupt catalog bytes, not
/// dates; they decode as the epoch. The threshold matches the legacy
/// engine's guard and must stay bit-exact.
const DATE_OFFSET_LIMIT: i32 = 47483;

/// Decodes one field. `trim` controls Char padding removal.
pub fn decode_field(column: &ColumnDef, bytes: &[u8], trim: bool) -> Result<Value> {
    let value = match column.column_type()? {
        ColumnType::Char => decode_char(bytes, trim),
        ColumnType::SmallInt => Value::Int(decode_i16(bytes)? as i64),
        ColumnType::Integer => Value::Int(decode_i32(bytes)? as i64),
        ColumnType::Serial => Value::Int(decode_u32(bytes)? as i64),
        ColumnType::Date => decode_date(bytes)?,
        ColumnType::Time => decode_time(bytes)?,
        ColumnType::Decimal => decode_decimal(bytes)
            .wrap_err_with(|| format!("column '{}' holds a malformed decimal", column.name()))?,
    };
    Ok(value)
}

/// Latin-1: every byte maps to the Unicode scalar of the same value.
fn decode_char(bytes: &[u8], trim: bool) -> Value {
    let text: String = bytes.iter().map(|&b| b as char).collect();
    if trim {
        Value::Text(
            text.trim_end_matches(|c: char| c.is_whitespace() || c == '\0')
                .to_string(),
        )
    } else {
        Value::Text(text)
    }
}

fn decode_i16(bytes: &[u8]) -> Result<i16> {
    let raw: [u8; 2] = bytes
        .try_into()
        .map_err(|_| eyre::eyre!("smallint field must be 2 bytes, got {}", bytes.len()))?;
    Ok(i16::from_be_bytes(raw))
}

fn decode_i32(bytes: &[u8]) -> Result<i32> {
    let raw: [u8; 4] = bytes
        .try_into()
        .map_err(|_| eyre::eyre!("integer field must be 4 bytes, got {}", bytes.len()))?;
    Ok(i32::from_be_bytes(raw))
}

fn decode_u32(bytes: &[u8]) -> Result<u32> {
    let raw: [u8; 4] = bytes
        .try_into()
        .map_err(|_| eyre::eyre!("serial field must be 4 bytes, got {}", bytes.len()))?;
    Ok(u32::from_be_bytes(raw))
}

fn decode_date(bytes: &[u8]) -> Result<Value> {
    let raw = decode_u32(bytes)?;
    if raw == DATE_NULL_SENTINEL {
        return Ok(Value::Null);
    }

    let mut offset = raw as i32;
    if offset >= DATE_OFFSET_LIMIT {
        offset = 0;
    }

    Ok(Value::Date(CalendarDate::from_day_offset(offset)))
}

fn decode_time(bytes: &[u8]) -> Result<Value> {
    let seconds = decode_u32(bytes)?;
    Ok(Value::Time(ClockTime::from_seconds(seconds)))
}

/// Reconstructs a packed decimal into its exact digit string.
fn decode_decimal(bytes: &[u8]) -> Result<Value> {
    ensure!(!bytes.is_empty(), "decimal field is empty");

    let header = bytes[0];
    let positive = header > 127;
    let point = ((header & 0x0F) as usize) * 2;

    let mut digits: SmallVec<[u8; 32]> = SmallVec::new();
    for &byte in &bytes[1..] {
        let pair = if positive {
            byte as i32
        } else {
            100 - byte as i32
        };
        ensure!(
            (0..=99).contains(&pair),
            "invalid digit pair byte {:#04x} in decimal field",
            byte
        );
        digits.push(b'0' + (pair / 10) as u8);
        digits.push(b'0' + (pair % 10) as u8);
    }

    let point = point.min(digits.len());
    let (integer, fraction) = digits.split_at(point);

    // Normalize away the pair-alignment zeros in front of the integer part.
    let mut integer = &integer[integer.iter().take_while(|&&d| d == b'0').count()..];
    if integer.is_empty() {
        integer = b"0";
    }

    let mut text = String::with_capacity(digits.len() + 2);
    if !positive {
        text.push('-');
    }
    text.extend(integer.iter().map(|&d| d as char));
    if !fraction.is_empty() {
        text.push('.');
        text.extend(fraction.iter().map(|&d| d as char));
    }

    Ok(Value::Decimal(text))
}
