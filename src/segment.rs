//! Typed field overlays ("segments") over a writable view.
//!
//! A segment binds a logical field to a fixed offset inside a [`Writer`]:
//! a single bit, one of the ten scalars, a fixed-capacity or
//! length-prefixed text slot, or a bitmap. Segments hold no decoded value
//! of their own; every access goes straight through the view's
//! bounds-checked codecs, so mutation writes through immediately and a
//! segment is valid exactly as long as the view it borrows.
//!
//! All segments expose the same narrow surface through [`Field`]:
//! `value()` decodes, `set_value()` encodes.
//!
//! [`Writer`]: crate::Writer

mod bitmap;
mod scalar;
mod string;

pub use bitmap::BitmapSegment;
pub use scalar::{
    BitSegment, F32Segment, F64Segment, I8Segment, I16Segment, I32Segment, I64Segment, U8Segment,
    U16Segment, U32Segment, U64Segment,
};
pub use string::{PrefixedStringSegment, StringSegment};

use crate::Result;

/// The capability every segment exposes: get and set a typed value at a
/// fixed position inside a view.
pub trait Field {
    /// The decoded value type of this field.
    type Value;

    /// Decodes the field's current value from the view.
    fn value(&self) -> Result<Self::Value>;

    /// Encodes `value` into the view, writing through immediately.
    fn set_value(&mut self, value: Self::Value) -> Result<()>;
}
