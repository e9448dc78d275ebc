//! Tests for the records module

use super::codec::decode_field;
use super::*;
use crate::schema::ColumnDef;
use crate::types::{CalendarDate, ClockTime, ColumnType, Value};

fn char_col(name: &str, colno: i16, length: i16) -> ColumnDef {
    ColumnDef::new(name, colno, ColumnType::Char, length)
}

#[test]
fn layout_record_size_is_width_sum_plus_terminator() {
    let columns = vec![
        char_col("tabname", 1, 18),
        char_col("owner", 2, 8),
        char_col("dirpath", 3, 64),
        ColumnDef::new("tabid", 4, ColumnType::Serial, 4),
        char_col("rest", 5, 37),
    ];

    let layout = RecordLayout::for_columns(&columns).unwrap();

    let width_sum: usize = columns.iter().map(|c| c.byte_width().unwrap()).sum();
    assert_eq!(layout.record_size(), width_sum + 1);
    assert_eq!(layout.record_size(), 132);
}

#[test]
fn layout_offsets_are_additive() {
    let columns = vec![
        ColumnDef::new("id", 1, ColumnType::Integer, 4),
        char_col("name", 2, 10),
        ColumnDef::new("born", 3, ColumnType::Date, 4),
    ];

    let layout = RecordLayout::for_columns(&columns).unwrap();

    assert_eq!(layout.slots()[0], FieldSlot { offset: 0, width: 4 });
    assert_eq!(layout.slots()[1], FieldSlot { offset: 4, width: 10 });
    assert_eq!(layout.slots()[2], FieldSlot { offset: 14, width: 4 });
    assert_eq!(layout.record_size(), 19);
}

#[test]
fn layout_field_slices_the_declared_span() {
    let columns = vec![
        ColumnDef::new("id", 1, ColumnType::SmallInt, 2),
        char_col("name", 2, 4),
    ];
    let layout = RecordLayout::for_columns(&columns).unwrap();
    let record = [0x00, 0x07, b'a', b'b', b'c', b' ', 0x0A];

    assert_eq!(layout.field(&record, 0), &[0x00, 0x07]);
    assert_eq!(layout.field(&record, 1), b"abc ");
}

#[test]
fn layout_rejects_unknown_type_codes() {
    let columns = vec![ColumnDef::from_catalog("mystery", 1, 9, 4)];
    let err = RecordLayout::for_columns(&columns).unwrap_err();
    assert!(format!("{:#}", err).contains("unsupported column type code: 9"));
}

#[test]
fn char_decoding_is_latin_1() {
    let col = char_col("name", 1, 6);
    let value = decode_field(&col, b"Jos\xE9  ", true).unwrap();
    assert_eq!(value, Value::Text("José".to_string()));
}

#[test]
fn char_trim_strips_trailing_padding_only() {
    let col = char_col("name", 1, 8);
    let value = decode_field(&col, b"  ab  \0\0", true).unwrap();
    assert_eq!(value, Value::Text("  ab".to_string()));
}

#[test]
fn char_trim_can_be_disabled() {
    let col = char_col("name", 1, 5);
    let value = decode_field(&col, b"ab   ", false).unwrap();
    assert_eq!(value, Value::Text("ab   ".to_string()));
}

#[test]
fn smallint_is_signed_big_endian() {
    let col = ColumnDef::new("n", 1, ColumnType::SmallInt, 2);
    assert_eq!(
        decode_field(&col, &[0x00, 0x07], true).unwrap(),
        Value::Int(7)
    );
    assert_eq!(
        decode_field(&col, &[0xFF, 0xFE], true).unwrap(),
        Value::Int(-2)
    );
}

#[test]
fn integer_is_signed_serial_is_unsigned() {
    let bytes = [0x80, 0x00, 0x00, 0x01];

    let integer = ColumnDef::new("n", 1, ColumnType::Integer, 4);
    assert_eq!(
        decode_field(&integer, &bytes, true).unwrap(),
        Value::Int(-2147483647)
    );

    let serial = ColumnDef::new("id", 1, ColumnType::Serial, 4);
    assert_eq!(
        decode_field(&serial, &bytes, true).unwrap(),
        Value::Int(2147483649)
    );
}

#[test]
fn date_null_sentinel_decodes_to_null() {
    let col = ColumnDef::new("born", 1, ColumnType::Date, 4);
    let value = decode_field(&col, &[0x80, 0x00, 0x00, 0x00], true).unwrap();
    assert_eq!(value, Value::Null);
}

#[test]
fn date_offsets_count_from_the_1899_epoch() {
    let col = ColumnDef::new("born", 1, ColumnType::Date, 4);

    assert_eq!(
        decode_field(&col, &0i32.to_be_bytes(), true).unwrap(),
        Value::Date(CalendarDate::new(1899, 12, 31))
    );
    assert_eq!(
        decode_field(&col, &1i32.to_be_bytes(), true).unwrap(),
        Value::Date(CalendarDate::new(1900, 1, 1))
    );
}

#[test]
fn date_offsets_at_the_limit_clamp_to_the_epoch() {
    let col = ColumnDef::new("born", 1, ColumnType::Date, 4);

    assert_eq!(
        decode_field(&col, &47482i32.to_be_bytes(), true).unwrap(),
        Value::Date(CalendarDate::new(2029, 12, 31))
    );
    assert_eq!(
        decode_field(&col, &47483i32.to_be_bytes(), true).unwrap(),
        Value::Date(CalendarDate::new(1899, 12, 31))
    );
}

#[test]
fn time_splits_seconds_since_midnight() {
    let col = ColumnDef::new("at", 1, ColumnType::Time, 4);

    assert_eq!(
        decode_field(&col, &3661u32.to_be_bytes(), true).unwrap(),
        Value::Time(ClockTime::from_seconds(3661))
    );
    match decode_field(&col, &86399u32.to_be_bytes(), true).unwrap() {
        Value::Time(t) => assert_eq!(t.to_string(), "23:59:59"),
        other => panic!("expected a time, got {:?}", other),
    }
}

/// Packs a decimal digit string the way the on-disk format does: header
/// byte carrying sign + point position, then base-100 digit pairs,
/// excess-100 encoded when negative.
fn encode_decimal(text: &str) -> Vec<u8> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (integer, fraction) = match rest.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rest, ""),
    };

    let integer = integer.trim_start_matches('0');
    let mut digits = String::new();
    if integer.len() % 2 == 1 {
        digits.push('0');
    }
    digits.push_str(integer);
    let point_nibble = (digits.len() / 2) as u8;
    digits.push_str(fraction);
    if digits.len() % 2 == 1 {
        digits.push('0');
    }

    let header = if negative {
        point_nibble
    } else {
        0x80 | point_nibble
    };
    let mut bytes = vec![header];
    for pair in digits.as_bytes().chunks(2) {
        let value = (pair[0] - b'0') * 10 + (pair[1] - b'0');
        bytes.push(if negative { 100 - value } else { value });
    }
    bytes
}

fn decimal_col(length: i16) -> ColumnDef {
    ColumnDef::new("amount", 1, ColumnType::Decimal, length)
}

#[test]
fn negative_decimal_round_trips_exactly() {
    let bytes = encode_decimal("-123.45");
    let value = decode_field(&decimal_col(0x0602), &bytes, true).unwrap();
    assert_eq!(value, Value::Decimal("-123.45".to_string()));
}

#[test]
fn positive_decimal_round_trips_exactly() {
    let bytes = encode_decimal("123.45");
    let value = decode_field(&decimal_col(0x0602), &bytes, true).unwrap();
    assert_eq!(value, Value::Decimal("123.45".to_string()));
}

#[test]
fn whole_number_decimal_has_no_point() {
    let bytes = encode_decimal("42");
    let value = decode_field(&decimal_col(0x0400), &bytes, true).unwrap();
    assert_eq!(value, Value::Decimal("42".to_string()));
}

#[test]
fn sub_unit_decimal_keeps_a_leading_zero() {
    let bytes = encode_decimal("0.45");
    let value = decode_field(&decimal_col(0x0004), &bytes, true).unwrap();
    assert_eq!(value, Value::Decimal("0.45".to_string()));
}

#[test]
fn decimal_rejects_out_of_range_digit_pairs() {
    // 0xFF cannot be a base-100 digit pair in a positive decimal.
    let err = decode_field(&decimal_col(0x0202), &[0x81, 0xFF], true).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("amount"));
    assert!(msg.contains("digit pair"));
}

#[test]
fn decode_field_rejects_unknown_type_codes_with_column_name() {
    let col = ColumnDef::from_catalog("mystery", 1, 11, 4);
    let err = decode_field(&col, &[0, 0, 0, 0], true).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("mystery"));
    assert!(msg.contains("unsupported column type code: 11"));
}
