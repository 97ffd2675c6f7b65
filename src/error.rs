//! Error types for view and segment operations.
//!
//! This module contains the [`Error`] type which represents all possible
//! failures when reading or writing through a view: out-of-window accesses,
//! unknown scalar types or widths, values that do not fit their destination,
//! and text that exceeds its slot.
//!
//! Every failure is a synchronous caller error. Nothing is retried or
//! recovered internally.

use std::fmt::{self, Display};

use crate::ScalarType;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when accessing
/// a byte buffer through a view or a segment.
#[derive(Debug)]
pub enum Error {
    /// An access falls outside the view's window.
    ///
    /// `offset` and `len` describe the rejected access in the view's logical
    /// coordinates; `window` is the view's length. For bitmap accesses the
    /// units are bits rather than bytes.
    OutOfBounds {
        offset: usize,
        len: usize,
        window: usize,
    },

    /// A bit index outside `0..=7` was passed to a single-bit accessor.
    BitOutOfRange(u8),

    /// A scalar type name failed to parse.
    UnknownType(String),

    /// No scalar type exists with the requested byte width.
    ///
    /// Only widths 1, 2, 4 and 8 map to integer types.
    UnknownWidth(usize),

    /// The scalar type is not supported by this operation.
    ///
    /// Bulk number operations exclude the 64-bit integer types, which have
    /// their own bulk calls.
    InvalidType(ScalarType),

    /// A value does not fit in the destination scalar type.
    ValueOutOfRange(ScalarType),

    /// Encoded text exceeds its slot's capacity.
    ValueTooLarge { len: usize, max: usize },

    /// The window does not decode under the requested text codec.
    InvalidText,
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfBounds {
                offset,
                len,
                window,
            } => formatter.write_str(&format!(
                "access of length {len} at offset {offset} out of range for window of length {window}"
            )),
            Error::BitOutOfRange(bit) => {
                formatter.write_str(&format!("bit index {bit} out of range, expected 0..=7"))
            }
            Error::UnknownType(name) => {
                formatter.write_str(&format!("unknown scalar type `{name}`"))
            }
            Error::UnknownWidth(width) => {
                formatter.write_str(&format!("no scalar type with a width of {width} bytes"))
            }
            Error::InvalidType(ty) => {
                formatter.write_str(&format!("scalar type {ty} not supported by this operation"))
            }
            Error::ValueOutOfRange(ty) => formatter.write_str(&format!("value does not fit in {ty}")),
            Error::ValueTooLarge { len, max } => formatter.write_str(&format!(
                "encoded length {len} exceeds slot capacity of {max} bytes"
            )),
            Error::InvalidText => formatter.write_str("window is not valid text for this codec"),
        }
    }
}

impl std::error::Error for Error {}
