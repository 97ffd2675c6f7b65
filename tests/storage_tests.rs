//! Tests for the storage capability traits and the per-byte fallback path

use bufseg::{ByteSink, ByteSource, Reader, ScalarType, StringSegment, TextCodec, Writer};
use bufseg::Field as _;

/// Storage split across two allocations. `contiguous` stays `None`, so
/// every bulk operation has to take the per-byte fallback.
struct SplitStorage {
    low: Vec<u8>,
    high: Vec<u8>,
}

impl SplitStorage {
    fn zeroed(len: usize) -> Self {
        let half = len / 2;
        Self {
            low: vec![0; half],
            high: vec![0; len - half],
        }
    }

    fn from_slice(data: &[u8]) -> Self {
        let half = data.len() / 2;
        Self {
            low: data[..half].to_vec(),
            high: data[half..].to_vec(),
        }
    }
}

impl ByteSource for SplitStorage {
    fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    fn byte(&self, index: usize) -> u8 {
        if index < self.low.len() {
            self.low[index]
        } else {
            self.high[index - self.low.len()]
        }
    }
}

impl ByteSink for SplitStorage {
    fn set_byte(&mut self, index: usize, value: u8) {
        if index < self.low.len() {
            self.low[index] = value;
        } else {
            self.high[index - self.low.len()] = value;
        }
    }
}

#[test]
fn test_fallback_scalar_round_trip() {
    let mut storage = SplitStorage::zeroed(8);
    let mut writer = Writer::new(&mut storage, 0).unwrap();

    // The u32 at offset 2 straddles the two halves.
    writer.write_u32(0xdead_beef, 2).unwrap();
    assert_eq!(writer.read_u32(2).unwrap(), 0xdead_beef);

    writer.write_u64(u64::MAX - 1, 0).unwrap();
    assert_eq!(writer.read_u64(0).unwrap(), u64::MAX - 1);
}

#[test]
fn test_fallback_matches_contiguous_decode() {
    let data = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06];
    let split = SplitStorage::from_slice(&data);

    let contiguous = Reader::new(&data, 0).unwrap();
    let fallback = Reader::new(&split, 0).unwrap();

    assert_eq!(fallback.read_u16(1).unwrap(), contiguous.read_u16(1).unwrap());
    assert_eq!(fallback.read_u32(2).unwrap(), contiguous.read_u32(2).unwrap());
    assert_eq!(
        fallback.to_number_vec(ScalarType::Uint16).unwrap(),
        contiguous.to_number_vec(ScalarType::Uint16).unwrap()
    );
    assert_eq!(fallback.to_vec(), contiguous.to_vec());
}

#[test]
fn test_fallback_text_decode() {
    let split = SplitStorage::from_slice(b"abc123");
    let reader = Reader::new(&split, 0).unwrap();
    assert_eq!(reader.text(TextCodec::Utf8).unwrap(), "abc123");
}

#[test]
fn test_fallback_put_bytes_and_copy() {
    let src_data = [0x0au8, 0x0b, 0x0c, 0x0d];

    // Contiguous source into fallback destination.
    let source = Reader::new(&src_data, 0).unwrap();
    let mut dest = SplitStorage::zeroed(4);
    let mut writer = Writer::new(&mut dest, 0).unwrap();
    writer.copy_from(&source, 0, 0, 4).unwrap();
    assert_eq!(writer.to_vec(), src_data.to_vec());

    // Fallback source into contiguous destination.
    let split_src = SplitStorage::from_slice(&src_data);
    let source = Reader::new(&split_src, 0).unwrap();
    let mut buf = [0u8; 4];
    let mut writer = Writer::new(&mut buf, 0).unwrap();
    writer.copy_from(&source, 0, 1, 3).unwrap();
    drop(writer);
    assert_eq!(buf, [0x0b, 0x0c, 0x0d, 0]);
}

#[test]
fn test_fallback_segments() {
    let mut storage = SplitStorage::zeroed(8);
    let mut writer = Writer::new(&mut storage, 0).unwrap();

    let mut name = StringSegment::new(&mut writer, 1, 6);
    name.set_text("split").unwrap();
    assert_eq!(name.value().unwrap(), "split");
}

#[test]
fn test_bounds_still_enforced_on_fallback() {
    let mut storage = SplitStorage::zeroed(4);
    let mut writer = Writer::new(&mut storage, 0).unwrap();
    assert!(writer.write_u32(0, 1).is_err());
    assert!(writer.read_u64(0).is_err());
}
