//! The fixed-width scalar type registry and the [`Scalar`] value type.
//!
//! [`ScalarType`] is the closed set of scalar kinds a view can encode or
//! decode: 8/16/32/64-bit integers in both signednesses, plus `float` and
//! `double`. [`Scalar`] carries one value of any of those kinds and is used
//! by the dynamic [`read`](crate::Reader::read)/[`write`](crate::Writer::write)
//! dispatch paths.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Error, Result};

/// One of the ten fixed-width scalar kinds.
///
/// Every type has a fixed byte width and, for the integer types, a signed
/// and unsigned counterpart of the same width.
///
/// # Example
///
/// ```
/// use bufseg::ScalarType;
///
/// assert_eq!(ScalarType::Uint32.width(), 4);
/// assert_eq!(ScalarType::unsigned_with_width(2).unwrap(), ScalarType::Uint16);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ScalarType {
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Uint64,
    Int64,
    Float,
    Double,
}

impl ScalarType {
    /// Returns the encoded width of this type in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::Uint8 | Self::Int8 => 1,
            Self::Uint16 | Self::Int16 => 2,
            Self::Uint32 | Self::Int32 | Self::Float => 4,
            Self::Uint64 | Self::Int64 | Self::Double => 8,
        }
    }

    /// Returns the unsigned integer type with the given byte width.
    ///
    /// Fails with [`Error::UnknownWidth`] for widths other than 1, 2, 4 or 8.
    pub fn unsigned_with_width(width: usize) -> Result<Self> {
        match width {
            1 => Ok(Self::Uint8),
            2 => Ok(Self::Uint16),
            4 => Ok(Self::Uint32),
            8 => Ok(Self::Uint64),
            _ => Err(Error::UnknownWidth(width)),
        }
    }

    /// Returns the signed integer type with the given byte width.
    ///
    /// Fails with [`Error::UnknownWidth`] for widths other than 1, 2, 4 or 8.
    pub fn signed_with_width(width: usize) -> Result<Self> {
        match width {
            1 => Ok(Self::Int8),
            2 => Ok(Self::Int16),
            4 => Ok(Self::Int32),
            8 => Ok(Self::Int64),
            _ => Err(Error::UnknownWidth(width)),
        }
    }

    /// Returns `true` for the 64-bit integer types.
    ///
    /// These are excluded from the number-domain bulk operations and routed
    /// through [`to_i64_vec`](crate::Reader::to_i64_vec),
    /// [`to_u64_vec`](crate::Reader::to_u64_vec) and their write
    /// counterparts instead.
    pub const fn is_sixty_four_bit(self) -> bool {
        matches!(self, Self::Uint64 | Self::Int64)
    }

    /// Returns the canonical lowercase name of this type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uint8 => "uint8",
            Self::Int8 => "int8",
            Self::Uint16 => "uint16",
            Self::Int16 => "int16",
            Self::Uint32 => "uint32",
            Self::Int32 => "int32",
            Self::Uint64 => "uint64",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl Display for ScalarType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for ScalarType {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Ok(match name {
            "uint8" => Self::Uint8,
            "int8" => Self::Int8,
            "uint16" => Self::Uint16,
            "int16" => Self::Int16,
            "uint32" => Self::Uint32,
            "int32" => Self::Int32,
            "uint64" => Self::Uint64,
            "int64" => Self::Int64,
            "float" => Self::Float,
            "double" => Self::Double,
            _ => return Err(Error::UnknownType(name.to_string())),
        })
    }
}

/// A single scalar value of any of the ten kinds.
///
/// A `Scalar` can only hold a value that is in range for its kind, so the
/// dynamic write path never needs to re-validate a value against its own
/// declared type. Converting a `Scalar` into a different kind is range
/// checked; see [`Scalar::normalize`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Scalar {
    Uint8(u8),
    Int8(i8),
    Uint16(u16),
    Int16(i16),
    Uint32(u32),
    Int32(i32),
    Uint64(u64),
    Int64(i64),
    Float(f32),
    Double(f64),
}

/// Converts a float into the integer domain; fails for non-finite values
/// and values with a fractional part.
fn float_to_int(value: f64) -> Option<i128> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    Some(value as i128)
}

macro_rules! scalar_to_int {
    ($($(#[$meta:meta])* ($fn:ident, $ty:ty, $tag:expr)),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $fn(self) -> Result<$ty> {
                self.widen_int()
                    .and_then(|wide| <$ty>::try_from(wide).ok())
                    .ok_or(Error::ValueOutOfRange($tag))
            }
        )*
    };
}

impl Scalar {
    /// Returns the kind of this value.
    pub const fn ty(&self) -> ScalarType {
        match self {
            Self::Uint8(_) => ScalarType::Uint8,
            Self::Int8(_) => ScalarType::Int8,
            Self::Uint16(_) => ScalarType::Uint16,
            Self::Int16(_) => ScalarType::Int16,
            Self::Uint32(_) => ScalarType::Uint32,
            Self::Int32(_) => ScalarType::Int32,
            Self::Uint64(_) => ScalarType::Uint64,
            Self::Int64(_) => ScalarType::Int64,
            Self::Float(_) => ScalarType::Float,
            Self::Double(_) => ScalarType::Double,
        }
    }

    /// Returns the value in the `f64` number domain.
    ///
    /// 64-bit integers above 2^53 lose precision here, which is why the
    /// bulk number operations exclude them.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Uint8(v) => v as f64,
            Self::Int8(v) => v as f64,
            Self::Uint16(v) => v as f64,
            Self::Int16(v) => v as f64,
            Self::Uint32(v) => v as f64,
            Self::Int32(v) => v as f64,
            Self::Uint64(v) => v as f64,
            Self::Int64(v) => v as f64,
            Self::Float(v) => v as f64,
            Self::Double(v) => v,
        }
    }

    fn widen_int(self) -> Option<i128> {
        match self {
            Self::Uint8(v) => Some(v as i128),
            Self::Int8(v) => Some(v as i128),
            Self::Uint16(v) => Some(v as i128),
            Self::Int16(v) => Some(v as i128),
            Self::Uint32(v) => Some(v as i128),
            Self::Int32(v) => Some(v as i128),
            Self::Uint64(v) => Some(v as i128),
            Self::Int64(v) => Some(v as i128),
            Self::Float(v) => float_to_int(v as f64),
            Self::Double(v) => float_to_int(v),
        }
    }

    scalar_to_int!(
        /// Converts into `u8`, failing with [`Error::ValueOutOfRange`] if the
        /// value is negative, fractional or too large.
        (to_u8, u8, ScalarType::Uint8),
        /// Converts into `i8`; range checked.
        (to_i8, i8, ScalarType::Int8),
        /// Converts into `u16`; range checked.
        (to_u16, u16, ScalarType::Uint16),
        /// Converts into `i16`; range checked.
        (to_i16, i16, ScalarType::Int16),
        /// Converts into `u32`; range checked.
        (to_u32, u32, ScalarType::Uint32),
        /// Converts into `i32`; range checked.
        (to_i32, i32, ScalarType::Int32),
        /// Converts into `u64`; range checked.
        (to_u64, u64, ScalarType::Uint64),
        /// Converts into `i64`; range checked.
        (to_i64, i64, ScalarType::Int64),
    );

    /// Converts into `f32` through the number domain.
    pub fn to_f32(self) -> Result<f32> {
        Ok(self.as_f64() as f32)
    }

    /// Converts into `f64` through the number domain.
    pub fn to_f64(self) -> Result<f64> {
        Ok(self.as_f64())
    }

    /// Re-expresses this value as a `Scalar` of kind `ty`.
    ///
    /// Integer targets reject values outside the target's range and floats
    /// with a fractional part; float targets accept any value.
    ///
    /// # Example
    ///
    /// ```
    /// use bufseg::{Scalar, ScalarType, Error};
    ///
    /// let two = Scalar::Uint64(2).normalize(ScalarType::Uint8).unwrap();
    /// assert_eq!(two, Scalar::Uint8(2));
    ///
    /// let err = Scalar::Int16(-1).normalize(ScalarType::Uint8).unwrap_err();
    /// assert!(matches!(err, Error::ValueOutOfRange(ScalarType::Uint8)));
    /// ```
    pub fn normalize(self, ty: ScalarType) -> Result<Scalar> {
        Ok(match ty {
            ScalarType::Uint8 => Scalar::Uint8(self.to_u8()?),
            ScalarType::Int8 => Scalar::Int8(self.to_i8()?),
            ScalarType::Uint16 => Scalar::Uint16(self.to_u16()?),
            ScalarType::Int16 => Scalar::Int16(self.to_i16()?),
            ScalarType::Uint32 => Scalar::Uint32(self.to_u32()?),
            ScalarType::Int32 => Scalar::Int32(self.to_i32()?),
            ScalarType::Uint64 => Scalar::Uint64(self.to_u64()?),
            ScalarType::Int64 => Scalar::Int64(self.to_i64()?),
            ScalarType::Float => Scalar::Float(self.to_f32()?),
            ScalarType::Double => Scalar::Double(self.to_f64()?),
        })
    }
}

macro_rules! scalar_from {
    ($(($ty:ty, $variant:ident)),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

scalar_from!(
    (u8, Uint8),
    (i8, Int8),
    (u16, Uint16),
    (i16, Int16),
    (u32, Uint32),
    (i32, Int32),
    (u64, Uint64),
    (i64, Int64),
    (f32, Float),
    (f64, Double),
);
