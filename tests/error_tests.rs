//! Tests for the Error type

use bufseg::{Error, ScalarType};

#[test]
fn test_display_out_of_bounds() {
    let error = Error::OutOfBounds {
        offset: 3,
        len: 4,
        window: 5,
    };
    assert_eq!(
        format!("{}", error),
        "access of length 4 at offset 3 out of range for window of length 5"
    );
}

#[test]
fn test_display_bit_out_of_range() {
    let error = Error::BitOutOfRange(8);
    assert_eq!(format!("{}", error), "bit index 8 out of range, expected 0..=7");
}

#[test]
fn test_display_unknown_type() {
    let error = Error::UnknownType("varint".to_string());
    assert_eq!(format!("{}", error), "unknown scalar type `varint`");
}

#[test]
fn test_display_unknown_width() {
    let error = Error::UnknownWidth(3);
    assert_eq!(
        format!("{}", error),
        "no scalar type with a width of 3 bytes"
    );
}

#[test]
fn test_display_invalid_type() {
    let error = Error::InvalidType(ScalarType::Uint64);
    assert_eq!(
        format!("{}", error),
        "scalar type uint64 not supported by this operation"
    );
}

#[test]
fn test_display_value_out_of_range() {
    let error = Error::ValueOutOfRange(ScalarType::Int8);
    assert_eq!(format!("{}", error), "value does not fit in int8");
}

#[test]
fn test_display_value_too_large() {
    let error = Error::ValueTooLarge { len: 12, max: 8 };
    assert_eq!(
        format!("{}", error),
        "encoded length 12 exceeds slot capacity of 8 bytes"
    );
}

#[test]
fn test_display_invalid_text() {
    let error = Error::InvalidText;
    assert_eq!(format!("{}", error), "window is not valid text for this codec");
}

#[test]
fn test_error_debug() {
    let error = Error::BitOutOfRange(8);
    assert!(format!("{:?}", error).contains("BitOutOfRange"));
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>() {}
    assert_error::<Error>();
}

#[test]
fn test_result_type() {
    let ok_result: bufseg::Result<i32> = Ok(42);
    assert_eq!(ok_result.unwrap(), 42);
}
