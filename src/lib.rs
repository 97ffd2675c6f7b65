//! Bounds-checked, structured access to windows of a byte buffer.
//!
//! `bufseg` is for code that builds or parses binary records — network
//! packets, file formats — without a schema compiler: fields are addressed
//! by explicit offset inside a caller-defined window. A [`Reader`] gives
//! read-only access, a [`Writer`] adds symmetric encode operations, and the
//! [`segment`] overlays bind typed logical fields (a bit, a scalar, a text
//! slot, a bitmap) to fixed offsets inside a writer.
//!
//! All multi-byte scalars are big-endian; single bits are addressed
//! most-significant-bit first. Views never copy storage: slicing derives a
//! narrower window over the same bytes, and mutation through one view is
//! immediately visible through every other view of the same buffer. The
//! crate does no locking; concurrent access to a shared buffer is the
//! caller's problem.
//!
//! # Example
//!
//! ```
//! use bufseg::{Writer, ScalarType, Scalar};
//!
//! let mut packet = [0u8; 8];
//! let mut writer = Writer::new(&mut packet, 0)?;
//!
//! writer.write_u16(0x1234, 0)?;
//! writer.write(ScalarType::Uint32, Scalar::Uint64(0xdead_beef), 2)?;
//!
//! assert_eq!(writer.read_u8(0)?, 0x12);
//! assert_eq!(writer.read_u8(1)?, 0x34);
//! assert_eq!(writer.read_u32(2)?, 0xdead_beef);
//! # Ok::<(), bufseg::Error>(())
//! ```
//!
//! Backing storage is anything implementing [`ByteSource`] / [`ByteSink`]:
//! byte slices, arrays and `Vec<u8>` out of the box, `bytes::Bytes` and
//! `bytes::BytesMut` with the `bytes` feature, or a custom storage — one
//! that cannot expose contiguous bytes simply falls back to per-byte
//! traffic with identical semantics.

mod error;
mod reader;
mod scalar;
pub mod segment;
mod storage;
mod text;
mod writer;

pub use error::{Error, Result};
pub use reader::Reader;
pub use scalar::{Scalar, ScalarType};
pub use segment::{
    BitSegment, BitmapSegment, F32Segment, F64Segment, Field, I8Segment, I16Segment, I32Segment,
    I64Segment, PrefixedStringSegment, StringSegment, U8Segment, U16Segment, U32Segment,
    U64Segment,
};
pub use storage::{ByteSink, ByteSource};
pub use text::TextCodec;
pub use writer::Writer;
