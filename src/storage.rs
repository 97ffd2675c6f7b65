//! Backing storage capability traits.
//!
//! A view never owns bytes; it borrows a storage that implements
//! [`ByteSource`] (read access) or [`ByteSink`] (mutate access). The traits
//! are deliberately narrow: a storage reports its length and moves single
//! bytes, and may opt in to the fast path by exposing its contiguous
//! representation through [`contiguous`](ByteSource::contiguous) /
//! [`contiguous_mut`](ByteSink::contiguous_mut).
//!
//! The default implementations of the contiguous accessors return `None`,
//! which selects the per-byte fallback everywhere: scalar gather/scatter,
//! region copies and text decoding all degrade to single-byte traffic but
//! keep identical semantics. A storage therefore only has to implement
//! `len` and the single-byte accessors to participate.

#[cfg(feature = "bytes")]
use bytes::{Bytes, BytesMut};

/// Read capability over externally owned byte storage.
///
/// Indexes are absolute byte positions in `0..len()`; callers (the views)
/// bounds-check before calling, so implementations may panic on an index
/// outside that range, as slice indexing does.
pub trait ByteSource {
    /// Total number of bytes in the storage.
    fn len(&self) -> usize;

    /// Returns `true` if the storage holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the byte at `index`.
    fn byte(&self, index: usize) -> u8;

    /// Returns the storage's bytes as one contiguous slice, if it can.
    ///
    /// Returning `None` (the default) forces the per-byte fallback path in
    /// every bulk operation.
    fn contiguous(&self) -> Option<&[u8]> {
        None
    }
}

/// Mutate capability over externally owned byte storage.
pub trait ByteSink: ByteSource {
    /// Overwrites the byte at `index`.
    fn set_byte(&mut self, index: usize, value: u8);

    /// Returns the storage's bytes as one contiguous mutable slice, if it can.
    fn contiguous_mut(&mut self) -> Option<&mut [u8]> {
        None
    }
}

impl ByteSource for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }

    #[inline]
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSink for [u8] {
    #[inline]
    fn set_byte(&mut self, index: usize, value: u8) {
        self[index] = value;
    }

    #[inline]
    fn contiguous_mut(&mut self) -> Option<&mut [u8]> {
        Some(self)
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }

    #[inline]
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> ByteSink for [u8; N] {
    #[inline]
    fn set_byte(&mut self, index: usize, value: u8) {
        self[index] = value;
    }

    #[inline]
    fn contiguous_mut(&mut self) -> Option<&mut [u8]> {
        Some(self)
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }

    #[inline]
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn set_byte(&mut self, index: usize, value: u8) {
        self[index] = value;
    }

    #[inline]
    fn contiguous_mut(&mut self) -> Option<&mut [u8]> {
        Some(self.as_mut_slice())
    }
}

#[cfg(feature = "bytes")]
impl ByteSource for Bytes {
    #[inline]
    fn len(&self) -> usize {
        Bytes::len(self)
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }

    #[inline]
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self.as_ref())
    }
}

#[cfg(feature = "bytes")]
impl ByteSource for BytesMut {
    #[inline]
    fn len(&self) -> usize {
        BytesMut::len(self)
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }

    #[inline]
    fn contiguous(&self) -> Option<&[u8]> {
        Some(self.as_ref())
    }
}

#[cfg(feature = "bytes")]
impl ByteSink for BytesMut {
    #[inline]
    fn set_byte(&mut self, index: usize, value: u8) {
        self.as_mut()[index] = value;
    }

    #[inline]
    fn contiguous_mut(&mut self) -> Option<&mut [u8]> {
        Some(self.as_mut())
    }
}
