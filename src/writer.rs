//! The writable view over a window of a byte buffer.

use std::borrow::Cow;
use std::fmt;

use zerocopy::BigEndian;
use zerocopy::byteorder;

use crate::reader::check_window;
use crate::{ByteSink, ByteSource, Error, Reader, Result, Scalar, ScalarType, TextCodec};

/// A writable, bounds-checked window over a byte buffer.
///
/// A writer carries the full read contract of [`Reader`] plus symmetric
/// big-endian encode operations, bit writes, bulk sequence writes and a
/// region copy. Every single scalar write validates its bounds before
/// mutating any byte, so it either fully succeeds or writes nothing; the
/// bulk writers ([`put_number_slice`](Self::put_number_slice),
/// [`put_i64_slice`](Self::put_i64_slice), [`put_u64_slice`](Self::put_u64_slice))
/// write element by element with no rollback, so a bounds failure partway
/// through leaves the earlier elements in place.
///
/// # Example
///
/// ```
/// use bufseg::Writer;
///
/// let mut data = [0u8; 4];
/// let mut writer = Writer::new(&mut data, 0).unwrap();
/// writer.write_u16(0x1234, 0).unwrap();
/// assert_eq!(writer.read_u8(0).unwrap(), 0x12);
/// assert_eq!(writer.read_u8(1).unwrap(), 0x34);
/// ```
pub struct Writer<'b, B: ?Sized + ByteSink = [u8]> {
    pub(crate) data: &'b mut B,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<'b, B: ?Sized + ByteSink> fmt::Debug for Writer<'b, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("Writer")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

macro_rules! impl_scalar_writes {
    ($($(#[$meta:meta])* ($fn:ident, $ty:ty, $be:ident)),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $fn(&mut self, value: $ty, offset: usize) -> Result<()> {
                self.put_array(byteorder::$be::<BigEndian>::new(value).to_bytes(), offset)
            }
        )*
    };
}

macro_rules! delegate_reads {
    ($($(#[$meta:meta])* ($fn:ident, $ty:ty)),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $fn(&self, offset: usize) -> Result<$ty> {
                self.as_reader().$fn(offset)
            }
        )*
    };
}

impl<'b, B: ?Sized + ByteSink> Writer<'b, B> {
    /// Wraps `data` in a writer whose window runs from `start` to the end
    /// of the buffer.
    pub fn new(data: &'b mut B, start: usize) -> Result<Self> {
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

    /// Wraps `data` in a writer over the inclusive byte range `start..=end`.
    pub fn with_end(data: &'b mut B, start: usize, end: usize) -> Result<Self> {
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

    /// Reborrows this writer's window as a read-only view.
    #[inline]
    pub fn as_reader(&self) -> Reader<'_, B> {
        Reader {
            data: &*self.data,
            start: self.start,
            end: self.end,
        }
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

    /// Cuts a read-only view out of this writer's window.
    ///
    /// See [`Reader::slice`].
    pub fn slice(&self, offset: usize, length: usize) -> Result<Reader<'_, B>> {
        self.as_reader().slice(offset, length)
    }

    /// Cuts a narrower writer out of this one, reborrowing the storage.
    ///
    /// The new writer aliases the same bytes; mutation through it is
    /// immediately visible through this writer once the borrow ends.
    pub fn slice_mut(&mut self, offset: usize, length: usize) -> Result<Writer<'_, B>> {
        check_window(offset, length, self.len())?;
        Ok(Writer {
            data: &mut *self.data,
            start: self.start + offset,
            end: self.start + offset + length,
        })
    }

    delegate_reads!(
        /// Reads the unsigned byte at `offset`.
        (read_u8, u8),
        /// Reads the signed byte at `offset`.
        (read_i8, i8),
        /// Reads a big-endian `u16` at `offset`.
        (read_u16, u16),
        /// Reads a big-endian `i16` at `offset`.
        (read_i16, i16),
        /// Reads a big-endian `u32` at `offset`.
        (read_u32, u32),
        /// Reads a big-endian `i32` at `offset`.
        (read_i32, i32),
        /// Reads a big-endian `u64` at `offset`.
        (read_u64, u64),
        /// Reads a big-endian `i64` at `offset`.
        (read_i64, i64),
        /// Reads a big-endian `f32` at `offset`.
        (read_f32, f32),
        /// Reads a big-endian `f64` at `offset`.
        (read_f64, f64),
    );

    /// Reads bit `bit` of the byte at `offset`; bit 0 is the MSB.
    #[inline]
    pub fn read_bit(&self, offset: usize, bit: u8) -> Result<u8> {
        self.as_reader().read_bit(offset, bit)
    }

    /// Reads the scalar of kind `ty` at `offset`.
    #[inline]
    pub fn read(&self, ty: ScalarType, offset: usize) -> Result<Scalar> {
        self.as_reader().read(ty, offset)
    }

    /// Decodes the whole window as text under `codec`.
    pub fn text(&self, codec: TextCodec) -> Result<Cow<'_, str>> {
        self.as_reader().text(codec)
    }

    /// Copies the window's bytes into an owned `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_reader().to_vec()
    }

    /// Decodes the window as a number-domain sequence; see
    /// [`Reader::to_number_vec`].
    pub fn to_number_vec(&self, ty: ScalarType) -> Result<Vec<f64>> {
        self.as_reader().to_number_vec(ty)
    }

    /// Decodes the window as a sequence of big-endian `i64` values.
    pub fn to_i64_vec(&self) -> Result<Vec<i64>> {
        self.as_reader().to_i64_vec()
    }

    /// Decodes the window as a sequence of big-endian `u64` values.
    pub fn to_u64_vec(&self) -> Result<Vec<u64>> {
        self.as_reader().to_u64_vec()
    }

    /// Scatters `N` bytes into the window at `offset`.
    #[inline]
    fn put_array<const N: usize>(&mut self, bytes: [u8; N], offset: usize) -> Result<()> {
        check_window(offset, N, self.len())?;
        let abs = self.start + offset;
        if let Some(dst) = self.data.contiguous_mut() {
            dst[abs..abs + N].copy_from_slice(&bytes);
        } else {
            for (i, byte) in bytes.into_iter().enumerate() {
                self.data.set_byte(abs + i, byte);
            }
        }
        Ok(())
    }

    /// Writes bit `bit` of the byte at `offset`; bit 0 is the MSB.
    ///
    /// Read-modify-write of a single byte; the other seven bits are
    /// preserved. Fails with [`Error::BitOutOfRange`] if `bit > 7`.
    pub fn write_bit(&mut self, value: bool, bit: u8, offset: usize) -> Result<()> {
        if bit > 7 {
            return Err(Error::BitOutOfRange(bit));
        }
        let mask = 1u8 << (7 - bit);
        let old = self.read_u8(offset)?;
        let new = if value { old | mask } else { old & !mask };
        self.write_u8(new, offset)
    }

    /// Writes the unsigned byte `value` at `offset`.
    #[inline]
    pub fn write_u8(&mut self, value: u8, offset: usize) -> Result<()> {
        check_window(offset, 1, self.len())?;
        self.data.set_byte(self.start + offset, value);
        Ok(())
    }

    /// Writes the signed byte `value` at `offset`.
    #[inline]
    pub fn write_i8(&mut self, value: i8, offset: usize) -> Result<()> {
        self.write_u8(value as u8, offset)
    }

    impl_scalar_writes!(
        /// Writes a big-endian `u16` at `offset`.
        (write_u16, u16, U16),
        /// Writes a big-endian `i16` at `offset`.
        (write_i16, i16, I16),
        /// Writes a big-endian `u32` at `offset`.
        (write_u32, u32, U32),
        /// Writes a big-endian `i32` at `offset`.
        (write_i32, i32, I32),
        /// Writes a big-endian `u64` at `offset`.
        (write_u64, u64, U64),
        /// Writes a big-endian `i64` at `offset`.
        (write_i64, i64, I64),
        /// Writes a big-endian `f32` at `offset`.
        (write_f32, f32, F32),
        /// Writes a big-endian `f64` at `offset`.
        (write_f64, f64, F64),
    );

    /// Writes `value` at `offset` as a scalar of kind `ty`.
    ///
    /// The value is first normalized into `ty`'s domain with a range check;
    /// see [`Scalar::normalize`]. Nothing is written on failure.
    pub fn write(&mut self, ty: ScalarType, value: Scalar, offset: usize) -> Result<()> {
        match value.normalize(ty)? {
            Scalar::Uint8(v) => self.write_u8(v, offset),
            Scalar::Int8(v) => self.write_i8(v, offset),
            Scalar::Uint16(v) => self.write_u16(v, offset),
            Scalar::Int16(v) => self.write_i16(v, offset),
            Scalar::Uint32(v) => self.write_u32(v, offset),
            Scalar::Int32(v) => self.write_i32(v, offset),
            Scalar::Uint64(v) => self.write_u64(v, offset),
            Scalar::Int64(v) => self.write_i64(v, offset),
            Scalar::Float(v) => self.write_f32(v, offset),
            Scalar::Double(v) => self.write_f64(v, offset),
        }
    }

    /// Writes number-domain `values` contiguously as scalars of kind `ty`,
    /// starting at `start` and stepping by the type's width.
    ///
    /// The 64-bit integer types are rejected with [`Error::InvalidType`];
    /// use [`put_i64_slice`](Self::put_i64_slice) or
    /// [`put_u64_slice`](Self::put_u64_slice) for those. Elements are
    /// written one at a time; a failure partway through leaves the earlier
    /// elements written.
    pub fn put_number_slice(&mut self, values: &[f64], ty: ScalarType, start: usize) -> Result<()> {
        if ty.is_sixty_four_bit() {
            return Err(Error::InvalidType(ty));
        }
        let width = ty.width();
        let mut offset = start;
        for &value in values {
            self.write(ty, Scalar::Double(value), offset)?;
            offset += width;
        }
        Ok(())
    }

    /// Writes `values` contiguously as big-endian `i64`, starting at `start`.
    pub fn put_i64_slice(&mut self, values: &[i64], start: usize) -> Result<()> {
        let mut offset = start;
        for &value in values {
            self.write_i64(value, offset)?;
            offset += 8;
        }
        Ok(())
    }

    /// Writes `values` contiguously as big-endian `u64`, starting at `start`.
    pub fn put_u64_slice(&mut self, values: &[u64], start: usize) -> Result<()> {
        let mut offset = start;
        for &value in values {
            self.write_u64(value, offset)?;
            offset += 8;
        }
        Ok(())
    }

    /// Writes the raw bytes of `data` into the window at `offset`.
    pub fn put_bytes(&mut self, data: &[u8], offset: usize) -> Result<()> {
        check_window(offset, data.len(), self.len())?;
        let abs = self.start + offset;
        if let Some(dst) = self.data.contiguous_mut() {
            dst[abs..abs + data.len()].copy_from_slice(data);
        } else {
            for (i, &byte) in data.iter().enumerate() {
                self.data.set_byte(abs + i, byte);
            }
        }
        Ok(())
    }

    /// Copies `length` bytes out of `source`, starting at its logical
    /// `source_start`, into this window at `dest_offset`.
    ///
    /// Both windows are checked before any byte moves. When both storages
    /// expose contiguous bytes the copy is a single `memcpy`; otherwise it
    /// falls back to a byte-by-byte loop through the storages' single-byte
    /// accessors. The borrow checker rules out `source` aliasing this
    /// writer's storage, so the regions never overlap.
    pub fn copy_from<S: ?Sized + ByteSource>(
        &mut self,
        source: &Reader<'_, S>,
        dest_offset: usize,
        source_start: usize,
        length: usize,
    ) -> Result<()> {
        check_window(dest_offset, length, self.len())?;
        check_window(source_start, length, source.len())?;
        let dest_abs = self.start + dest_offset;
        let src_abs = source.start + source_start;
        if let Some(src) = source.data.contiguous() {
            if let Some(dst) = self.data.contiguous_mut() {
                dst[dest_abs..dest_abs + length].copy_from_slice(&src[src_abs..src_abs + length]);
                return Ok(());
            }
        }
        for i in 0..length {
            self.data.set_byte(dest_abs + i, source.data.byte(src_abs + i));
        }
        Ok(())
    }
}
