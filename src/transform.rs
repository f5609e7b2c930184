//! Textual encodings of the full byte contents.
//!
//! Every function here is a pure function of the byte sequence; none of them
//! consult the cursor or the byte order.

use base64::{engine::general_purpose, Engine as _};
use bstr::BString;

use crate::{ByteBuffer, Error, Result};

impl ByteBuffer {
    /// The raw bytes reinterpreted as a single text unit, with no
    /// transformation. Arbitrary bytes survive this round trip.
    pub fn to_binary(&self) -> BString {
        BString::from(self.bytes.as_slice())
    }

    /// Lowercase hexadecimal, two digits per byte, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// The bytes reinterpreted as UTF-8 text.
    ///
    /// Malformed sequences are rejected with [`Error::InvalidArgument`], not
    /// repaired.
    pub fn to_utf8(&self) -> Result<String> {
        String::from_utf8(self.bytes.clone()).map_err(|_| Error::InvalidArgument)
    }

    /// Standard-alphabet base64 with padding.
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// The byte sequence as one element per position.
    pub fn to_array(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Dispatches to one of the four encodings by tag: `binary`, `hex`,
    /// `utf8`, or `base64`. Any other tag fails with
    /// [`Error::InvalidArgument`].
    ///
    /// Returns a [`BString`] so the `binary` arm stays lossless for
    /// non-UTF-8 contents.
    pub fn to_string(&self, kind: &str) -> Result<BString> {
        match kind {
            "binary" => Ok(self.to_binary()),
            "hex" => Ok(BString::from(self.to_hex())),
            "utf8" => Ok(BString::from(self.to_utf8()?)),
            "base64" => Ok(BString::from(self.to_base64())),
            _ => Err(Error::InvalidArgument),
        }
    }
}
