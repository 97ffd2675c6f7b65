//! The read-only view over a window of a byte buffer.

use std::borrow::Cow;
use std::fmt;

use zerocopy::BigEndian;
use zerocopy::byteorder;

use crate::{ByteSource, Error, Result, Scalar, ScalarType, TextCodec};

/// Checks that an access of `len` bytes at logical `offset` stays inside a
/// window of length `window`.
#[inline]
pub(crate) fn check_window(offset: usize, len: usize, window: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= window => Ok(()),
        _ => Err(Error::OutOfBounds {
            offset,
            len,
            window,
        }),
    }
}

/// A read-only, bounds-checked window over a byte buffer.
///
/// A reader borrows its backing storage and addresses it through a window:
/// every logical offset is relative to the window's start, and every access
/// is checked against the window's end before any byte is touched. Slicing
/// produces narrower readers over the same storage without copying.
///
/// Multi-byte scalars are decoded big-endian; single bits are addressed
/// most-significant-bit first within their byte.
///
/// # Example
///
/// ```
/// use bufseg::Reader;
///
/// let data = [0x12, 0x34, 0x56, 0x78];
/// let reader = Reader::new(&data, 0).unwrap();
/// assert_eq!(reader.read_u16(0).unwrap(), 0x1234);
/// assert_eq!(reader.read_u32(0).unwrap(), 0x12345678);
///
/// let tail = reader.slice(2, 2).unwrap();
/// assert_eq!(tail.read_u8(0).unwrap(), 0x56);
/// ```
pub struct Reader<'b, B: ?Sized + ByteSource = [u8]> {
    pub(crate) data: &'b B,
    /// Absolute start of the window.
    pub(crate) start: usize,
    /// Absolute exclusive end of the window.
    pub(crate) end: usize,
}

impl<'b, B: ?Sized + ByteSource> Clone for Reader<'b, B> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'b, B: ?Sized + ByteSource> Copy for Reader<'b, B> {}

impl<'b, B: ?Sized + ByteSource> fmt::Debug for Reader<'b, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("Reader")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

macro_rules! impl_scalar_reads {
    ($($(#[$meta:meta])* ($fn:ident, $ty:ty, $be:ident, $width:literal)),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $fn(&self, offset: usize) -> Result<$ty> {
                Ok(byteorder::$be::<BigEndian>::from_bytes(self.read_array::<$width>(offset)?).get())
            }
        )*
    };
}

impl<'b, B: ?Sized + ByteSource> Reader<'b, B> {
    /// Wraps `data` in a reader whose window runs from `start` to the end
    /// of the buffer.
    pub fn new(data: &'b B, start: usize) -> Result<Self> {
        let total = data.len();
        if start > total {
            return Err(Error::OutOfBounds {
                offset: start,
                len: 0,
                window: total,
            });
        }
        Ok(Self {
            data,
            start,
            end: total,
        })
    }

    /// Wraps `data` in a reader over the inclusive byte range
    /// `start..=end`.
    pub fn with_end(data: &'b B, start: usize, end: usize) -> Result<Self> {
        let total = data.len();
        if start > end || end >= total {
            return Err(Error::OutOfBounds {
                offset: start,
                len: end.wrapping_sub(start).wrapping_add(1),
                window: total,
            });
        }
        Ok(Self {
            data,
            start,
            end: end + 1,
        })
    }

    /// Number of bytes in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Cuts a narrower reader out of this one.
    ///
    /// The new reader shares the same backing storage; nothing is copied,
    /// and bytes mutated through another view remain visible through the
    /// slice. Fails with [`Error::OutOfBounds`] if the requested region
    /// exceeds the current window.
    pub fn slice(&self, offset: usize, length: usize) -> Result<Reader<'b, B>> {
        check_window(offset, length, self.len())?;
        Ok(Reader {
            data: self.data,
            start: self.start + offset,
            end: self.start + offset + length,
        })
    }

    /// Gathers `N` window bytes starting at `offset`.
    #[inline]
    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        check_window(offset, N, self.len())?;
        let abs = self.start + offset;
        let mut buf = [0u8; N];
        if let Some(bytes) = self.data.contiguous() {
            buf.copy_from_slice(&bytes[abs..abs + N]);
        } else {
            for (i, slot) in buf.iter_mut().enumerate() {
                *slot = self.data.byte(abs + i);
            }
        }
        Ok(buf)
    }

    /// Reads bit `bit` of the byte at `offset`.
    ///
    /// Bit 0 is the most significant bit of the byte. Fails with
    /// [`Error::BitOutOfRange`] if `bit > 7`.
    pub fn read_bit(&self, offset: usize, bit: u8) -> Result<u8> {
        if bit > 7 {
            return Err(Error::BitOutOfRange(bit));
        }
        let byte = self.read_u8(offset)?;
        Ok((byte >> (7 - bit)) & 1)
    }

    /// Reads the unsigned byte at `offset`.
    #[inline]
    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        check_window(offset, 1, self.len())?;
        Ok(self.data.byte(self.start + offset))
    }

    /// Reads the signed byte at `offset`.
    #[inline]
    pub fn read_i8(&self, offset: usize) -> Result<i8> {
        Ok(self.read_u8(offset)? as i8)
    }

    impl_scalar_reads!(
        /// Reads a big-endian `u16` at `offset`.
        (read_u16, u16, U16, 2),
        /// Reads a big-endian `i16` at `offset`.
        (read_i16, i16, I16, 2),
        /// Reads a big-endian `u32` at `offset`.
        (read_u32, u32, U32, 4),
        /// Reads a big-endian `i32` at `offset`.
        (read_i32, i32, I32, 4),
        /// Reads a big-endian `u64` at `offset`.
        (read_u64, u64, U64, 8),
        /// Reads a big-endian `i64` at `offset`.
        (read_i64, i64, I64, 8),
        /// Reads a big-endian `f32` at `offset`.
        (read_f32, f32, F32, 4),
        /// Reads a big-endian `f64` at `offset`.
        (read_f64, f64, F64, 8),
    );

    /// Reads the scalar of kind `ty` at `offset`.
    pub fn read(&self, ty: ScalarType, offset: usize) -> Result<Scalar> {
        Ok(match ty {
            ScalarType::Uint8 => Scalar::Uint8(self.read_u8(offset)?),
            ScalarType::Int8 => Scalar::Int8(self.read_i8(offset)?),
            ScalarType::Uint16 => Scalar::Uint16(self.read_u16(offset)?),
            ScalarType::Int16 => Scalar::Int16(self.read_i16(offset)?),
            ScalarType::Uint32 => Scalar::Uint32(self.read_u32(offset)?),
            ScalarType::Int32 => Scalar::Int32(self.read_i32(offset)?),
            ScalarType::Uint64 => Scalar::Uint64(self.read_u64(offset)?),
            ScalarType::Int64 => Scalar::Int64(self.read_i64(offset)?),
            ScalarType::Float => Scalar::Float(self.read_f32(offset)?),
            ScalarType::Double => Scalar::Double(self.read_f64(offset)?),
        })
    }

    /// Decodes the whole window as text under `codec`.
    ///
    /// Borrows from the backing storage when it is contiguous and the bytes
    /// decode without rewriting.
    pub fn text(&self, codec: TextCodec) -> Result<Cow<'b, str>> {
        match self.data.contiguous() {
            Some(bytes) => codec.decode(&bytes[self.start..self.end]),
            None => {
                let gathered: Vec<u8> = (self.start..self.end).map(|i| self.data.byte(i)).collect();
                Ok(Cow::Owned(codec.decode(&gathered)?.into_owned()))
            }
        }
    }

    /// Copies the window's bytes into an owned `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        match self.data.contiguous() {
            Some(bytes) => bytes[self.start..self.end].to_vec(),
            None => (self.start..self.end).map(|i| self.data.byte(i)).collect(),
        }
    }

    /// Decodes the window as a sequence of scalars of kind `ty`, returned
    /// in the `f64` number domain.
    ///
    /// Yields `len() / ty.width()` elements, each an independent scalar read
    /// at `i * width`. The 64-bit integer types are rejected with
    /// [`Error::InvalidType`]; use [`to_i64_vec`](Self::to_i64_vec) or
    /// [`to_u64_vec`](Self::to_u64_vec) for those.
    pub fn to_number_vec(&self, ty: ScalarType) -> Result<Vec<f64>> {
        if ty.is_sixty_four_bit() {
            return Err(Error::InvalidType(ty));
        }
        let width = ty.width();
        let count = self.len() / width;
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(self.read(ty, i * width)?.as_f64());
        }
        Ok(values)
    }

    /// Decodes the window as a sequence of big-endian `i64` values.
    pub fn to_i64_vec(&self) -> Result<Vec<i64>> {
        let count = self.len() / 8;
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(self.read_i64(i * 8)?);
        }
        Ok(values)
    }

    /// Decodes the window as a sequence of big-endian `u64` values.
    pub fn to_u64_vec(&self) -> Result<Vec<u64>> {
        let count = self.len() / 8;
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(self.read_u64(i * 8)?);
        }
        Ok(values)
    }
}
