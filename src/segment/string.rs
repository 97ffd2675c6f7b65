//! Fixed-capacity and length-prefixed text segments.

use crate::segment::Field;
use crate::{ByteSink, Error, Result, Scalar, ScalarType, TextCodec, Writer};

/// A fixed-capacity UTF-8 text slot.
///
/// The slot occupies `max_length` bytes. Writing encodes the text at the
/// slot's start, zero-pads the remainder, and records the encoded byte
/// length for subsequent reads. Writing text whose encoding exceeds
/// `max_length` fails with [`Error::ValueTooLarge`] before any byte is
/// touched.
///
/// The recorded length is a cache, not part of the byte layout. A segment
/// created with [`StringSegment::new`] assumes the full slot is text until
/// the first write through it; if the slot was written by other code, bind
/// with [`StringSegment::with_byte_length`] and the actual length instead.
pub struct StringSegment<'v, 'b, B: ?Sized + ByteSink = [u8]> {
    view: &'v mut Writer<'b, B>,
    offset: usize,
    max_length: usize,
    byte_length: usize,
}

impl<'v, 'b, B: ?Sized + ByteSink> StringSegment<'v, 'b, B> {
    /// Binds a text slot of `max_length` bytes to `view` at `offset`.
    ///
    /// The current byte length defaults to `max_length`.
    pub fn new(view: &'v mut Writer<'b, B>, offset: usize, max_length: usize) -> Self {
        Self {
            view,
            offset,
            max_length,
            byte_length: max_length,
        }
    }

    /// Binds a text slot whose current content is known to be
    /// `byte_length` bytes long.
    pub fn with_byte_length(
        view: &'v mut Writer<'b, B>,
        offset: usize,
        max_length: usize,
        byte_length: usize,
    ) -> Self {
        Self {
            view,
            offset,
            max_length,
            byte_length,
        }
    }

    /// The encoded byte length of the slot's current content.
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Decodes the slot's current content.
    pub fn text(&self) -> Result<String> {
        Ok(self
            .view
            .slice(self.offset, self.byte_length)?
            .text(TextCodec::Utf8)?
            .into_owned())
    }

    /// Encodes `value` into the slot and zero-pads up to `max_length`.
    pub fn set_text(&mut self, value: &str) -> Result<()> {
        let bytes = value.as_bytes();
        if bytes.len() > self.max_length {
            return Err(Error::ValueTooLarge {
                len: bytes.len(),
                max: self.max_length,
            });
        }
        let mut slot = self.view.slice_mut(self.offset, self.max_length)?;
        slot.put_bytes(bytes, 0)?;
        for i in bytes.len()..self.max_length {
            slot.write_u8(0, i)?;
        }
        self.byte_length = bytes.len();
        Ok(())
    }
}

impl<'v, 'b, B: ?Sized + ByteSink> Field for StringSegment<'v, 'b, B> {
    type Value = String;

    fn value(&self) -> Result<String> {
        self.text()
    }

    fn set_value(&mut self, value: String) -> Result<()> {
        self.set_text(&value)
    }
}

/// A length-prefixed UTF-8 text slot.
///
/// The slot occupies `total_length` bytes: the payload at the slot's start,
/// then an unsigned big-endian integer of `prefix_width` bytes (1, 2, 4 or
/// 8) in the slot's trailing bytes recording the payload's exact byte
/// length. Writing text longer than `total_length - prefix_width` fails
/// with [`Error::ValueTooLarge`].
pub struct PrefixedStringSegment<'v, 'b, B: ?Sized + ByteSink = [u8]> {
    view: &'v mut Writer<'b, B>,
    offset: usize,
    total_length: usize,
    prefix: ScalarType,
}

impl<'v, 'b, B: ?Sized + ByteSink> PrefixedStringSegment<'v, 'b, B> {
    /// Binds a prefixed text slot of `total_length` bytes to `view` at
    /// `offset`, with a trailing length prefix of `prefix_width` bytes.
    ///
    /// Fails with [`Error::UnknownWidth`] if `prefix_width` is not 1, 2, 4
    /// or 8, and with [`Error::OutOfBounds`] if the prefix alone does not
    /// fit in the slot.
    pub fn new(
        view: &'v mut Writer<'b, B>,
        offset: usize,
        total_length: usize,
        prefix_width: usize,
    ) -> Result<Self> {
        let prefix = ScalarType::unsigned_with_width(prefix_width)?;
        if prefix_width > total_length {
            return Err(Error::OutOfBounds {
                offset: 0,
                len: prefix_width,
                window: total_length,
            });
        }
        Ok(Self {
            view,
            offset,
            total_length,
            prefix,
        })
    }

    /// The payload capacity: `total_length` minus the prefix width.
    pub fn capacity(&self) -> usize {
        self.total_length - self.prefix.width()
    }

    /// Decodes the payload whose length the prefix records.
    pub fn text(&self) -> Result<String> {
        let slot = self.view.slice(self.offset, self.total_length)?;
        let payload_len = slot.read(self.prefix, self.capacity())?.to_u64()? as usize;
        Ok(slot.slice(0, payload_len)?.text(TextCodec::Utf8)?.into_owned())
    }

    /// Encodes `value` at the slot's start and records its byte length in
    /// the trailing prefix.
    pub fn set_text(&mut self, value: &str) -> Result<()> {
        let bytes = value.as_bytes();
        let capacity = self.capacity();
        if bytes.len() > capacity {
            return Err(Error::ValueTooLarge {
                len: bytes.len(),
                max: capacity,
            });
        }
        // Normalize the length into the prefix type before touching the slot.
        let recorded = Scalar::Uint64(bytes.len() as u64).normalize(self.prefix)?;
        let mut slot = self.view.slice_mut(self.offset, self.total_length)?;
        slot.put_bytes(bytes, 0)?;
        for i in bytes.len()..capacity {
            slot.write_u8(0, i)?;
        }
        slot.write(self.prefix, recorded, capacity)
    }
}

impl<'v, 'b, B: ?Sized + ByteSink> Field for PrefixedStringSegment<'v, 'b, B> {
    type Value = String;

    fn value(&self) -> Result<String> {
        self.text()
    }

    fn set_value(&mut self, value: String) -> Result<()> {
        self.set_text(&value)
    }
}
