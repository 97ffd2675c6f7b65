//! Tests for the read-only view

use bufseg::{Error, Reader, ScalarType, TextCodec};

#[test]
fn test_window_construction() {
    let data = [0x01u8, 0x02, 0x03, 0x04];
    let reader = Reader::new(&data, 1).unwrap();
    assert_eq!(reader.len(), 3);
    assert_eq!(reader.read_u8(0).unwrap(), 0x02);

    let reader = Reader::with_end(&data, 1, 2).unwrap();
    assert_eq!(reader.len(), 2);
    assert_eq!(reader.read_u8(1).unwrap(), 0x03);
    assert!(reader.read_u8(2).is_err());
}

#[test]
fn test_construction_rejects_bad_ranges() {
    let data = [0u8; 4];
    assert!(matches!(
        Reader::new(&data, 5),
        Err(Error::OutOfBounds { .. })
    ));
    assert!(matches!(
        Reader::with_end(&data, 0, 4),
        Err(Error::OutOfBounds { .. })
    ));
    assert!(matches!(
        Reader::with_end(&data, 3, 2),
        Err(Error::OutOfBounds { .. })
    ));
}

#[test]
fn test_empty_window() {
    let data = [0u8; 4];
    let reader = Reader::new(&data, 4).unwrap();
    assert_eq!(reader.len(), 0);
    assert!(reader.is_empty());
    assert!(reader.read_u8(0).is_err());
    assert_eq!(
        reader.to_number_vec(ScalarType::Uint8).unwrap(),
        Vec::<f64>::new()
    );
}

#[test]
fn test_slice_shares_storage() {
    let data = [0x01u8, 0x02, 0x03, 0x04];
    let reader = Reader::with_end(&data, 1, 3).unwrap();
    let sliced = reader.slice(1, 2).unwrap();

    assert_eq!(sliced.len(), 2);
    assert_eq!(sliced.read_u8(0).unwrap(), 0x03);
    assert_eq!(sliced.read_u8(1).unwrap(), 0x04);
    // A slice's reads match the parent's at corresponding offsets.
    assert_eq!(sliced.read_u8(0).unwrap(), reader.read_u8(1).unwrap());
}

#[test]
fn test_slice_out_of_range() {
    let data = [0u8; 4];
    let reader = Reader::new(&data, 0).unwrap();
    assert!(matches!(
        reader.slice(2, 3),
        Err(Error::OutOfBounds { offset: 2, len: 3, window: 4 })
    ));
    assert!(matches!(
        reader.slice(5, 0),
        Err(Error::OutOfBounds { .. })
    ));
    // Slicing a slice checks against the narrowed window.
    let narrow = reader.slice(1, 2).unwrap();
    assert!(narrow.slice(0, 3).is_err());
}

#[test]
fn test_read_bit_msb_first() {
    let data = [0b1010_1010u8];
    let reader = Reader::new(&data, 0).unwrap();

    assert_eq!(reader.read_bit(0, 0).unwrap(), 1);
    assert_eq!(reader.read_bit(0, 1).unwrap(), 0);
    assert_eq!(reader.read_bit(0, 2).unwrap(), 1);
    assert_eq!(reader.read_bit(0, 3).unwrap(), 0);
    assert_eq!(reader.read_bit(0, 4).unwrap(), 1);
    assert_eq!(reader.read_bit(0, 5).unwrap(), 0);
    assert_eq!(reader.read_bit(0, 6).unwrap(), 1);
    assert_eq!(reader.read_bit(0, 7).unwrap(), 0);
}

#[test]
fn test_read_bit_rejects_bad_index() {
    let data = [0u8];
    let reader = Reader::new(&data, 0).unwrap();
    assert!(matches!(reader.read_bit(0, 8), Err(Error::BitOutOfRange(8))));
}

#[test]
fn test_big_endian_decode() {
    let data = [0x12u8, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0];
    let reader = Reader::new(&data, 0).unwrap();

    assert_eq!(reader.read_u16(0).unwrap(), 0x1234);
    assert_eq!(reader.read_u32(0).unwrap(), 0x1234_5678);
    assert_eq!(reader.read_u64(0).unwrap(), 0x1234_5678_9abc_def0);
    assert_eq!(reader.read_i16(6).unwrap(), i16::from_be_bytes([0xde, 0xf0]));
}

#[test]
fn test_read_bounds_checked_per_width() {
    let data = [0u8; 4];
    let reader = Reader::new(&data, 0).unwrap();

    assert!(reader.read_u32(0).is_ok());
    assert!(matches!(
        reader.read_u32(1),
        Err(Error::OutOfBounds { offset: 1, len: 4, window: 4 })
    ));
    assert!(reader.read_u64(0).is_err());
    assert!(reader.read_u8(4).is_err());
}

#[test]
fn test_offsets_relative_to_window_start() {
    let data = [0x00u8, 0x12, 0x34, 0x00];
    let reader = Reader::with_end(&data, 1, 2).unwrap();
    assert_eq!(reader.read_u16(0).unwrap(), 0x1234);
    // The window end is enforced even though the buffer continues.
    assert!(reader.read_u16(1).is_err());
}

#[test]
fn test_text_utf8() {
    let data = b"\x00abc123\x00";
    let reader = Reader::with_end(&data[..], 1, 6).unwrap();
    assert_eq!(reader.text(TextCodec::Utf8).unwrap(), "abc123");
}

#[test]
fn test_text_rejects_invalid_utf8() {
    let data = [0xffu8, 0xfe];
    let reader = Reader::new(&data, 0).unwrap();
    assert!(matches!(
        reader.text(TextCodec::Utf8),
        Err(Error::InvalidText)
    ));
}

#[test]
fn test_text_mutf8() {
    // Modified UTF-8 encodes NUL as 0xC0 0x80.
    let data = [b'a', 0xc0, 0x80, b'b'];
    let reader = Reader::new(&data, 0).unwrap();
    assert_eq!(reader.text(TextCodec::Mutf8).unwrap(), "a\0b");
}

#[test]
fn test_to_number_vec_counts_and_values() {
    let data = [0x00u8, 0x01, 0x00, 0x02, 0x00, 0x03, 0xff];
    let reader = Reader::new(&data, 0).unwrap();

    let words = reader.to_number_vec(ScalarType::Uint16).unwrap();
    assert_eq!(words, vec![1.0, 2.0, 3.0]);

    let bytes = reader.to_number_vec(ScalarType::Uint8).unwrap();
    assert_eq!(bytes.len(), 7);
    assert_eq!(bytes[6], 255.0);

    // floor(7 / 4) == 1
    assert_eq!(reader.to_number_vec(ScalarType::Uint32).unwrap().len(), 1);
}

#[test]
fn test_to_number_vec_signed_and_float() {
    let mut data = Vec::new();
    data.extend_from_slice(&(-5i32).to_be_bytes());
    data.extend_from_slice(&1.5f32.to_be_bytes());
    let reader = Reader::new(&data, 0).unwrap();

    assert_eq!(reader.to_number_vec(ScalarType::Int32).unwrap()[0], -5.0);
    assert_eq!(reader.to_number_vec(ScalarType::Float).unwrap()[1], 1.5);
}

#[test]
fn test_to_number_vec_rejects_64_bit() {
    let data = [0u8; 16];
    let reader = Reader::new(&data, 0).unwrap();
    assert!(matches!(
        reader.to_number_vec(ScalarType::Uint64),
        Err(Error::InvalidType(ScalarType::Uint64))
    ));
    assert!(matches!(
        reader.to_number_vec(ScalarType::Int64),
        Err(Error::InvalidType(ScalarType::Int64))
    ));
}

#[test]
fn test_to_i64_and_u64_vec() {
    let mut data = Vec::new();
    data.extend_from_slice(&(-1i64).to_be_bytes());
    data.extend_from_slice(&2i64.to_be_bytes());
    data.push(0xaa); // trailing partial element is ignored
    let reader = Reader::new(&data, 0).unwrap();

    assert_eq!(reader.to_i64_vec().unwrap(), vec![-1, 2]);
    assert_eq!(reader.to_u64_vec().unwrap(), vec![u64::MAX, 2]);
}

#[test]
fn test_to_vec() {
    let data = [1u8, 2, 3, 4];
    let reader = Reader::with_end(&data, 1, 2).unwrap();
    assert_eq!(reader.to_vec(), vec![2, 3]);
}

#[test]
fn test_reader_over_vec_storage() {
    let data: Vec<u8> = vec![0x12, 0x34];
    let reader = Reader::new(&data, 0).unwrap();
    assert_eq!(reader.read_u16(0).unwrap(), 0x1234);
}

#[cfg(feature = "bytes")]
#[test]
fn test_reader_over_bytes_storage() {
    let data = bytes::Bytes::from_static(&[0x12, 0x34, 0x56, 0x78]);
    let reader = Reader::with_end(&data, 1, 3).unwrap();
    assert_eq!(reader.read_u16(0).unwrap(), 0x3456);
}
