//! Text codecs for window decoding.

use std::borrow::Cow;

use crate::{Error, Result};

/// Named codec used when decoding a window as text.
///
/// Encoding through segments is always plain UTF-8, byte for byte; the codec
/// only varies the decode side.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextCodec {
    /// Standard UTF-8.
    #[default]
    Utf8,
    /// Java-style modified UTF-8 (CESU-8 with encoded NUL), as found in
    /// JVM class files and NBT data.
    Mutf8,
}

impl TextCodec {
    /// Decodes `bytes` under this codec.
    ///
    /// Borrows from the input when the bytes are already valid UTF-8; fails
    /// with [`Error::InvalidText`] on malformed input.
    pub fn decode(self, bytes: &[u8]) -> Result<Cow<'_, str>> {
        match self {
            TextCodec::Utf8 => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|_| Error::InvalidText),
            TextCodec::Mutf8 => {
                simd_cesu8::mutf8::decode(bytes).map_err(|_| Error::InvalidText)
            }
        }
    }
}
