//! Canonical in-memory UUID representation.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CodecError, CodecResult};
use crate::format::format_canonical;
use crate::parse::parse_loose;

/// A 128-bit UUID held as 16 bytes in network (big-endian) byte order.
///
/// This is the sole canonical in-memory representation: text input is
/// normalized into it by the parser, and canonical text is only ever
/// produced from it by the formatter. Immutable once constructed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Creates a UUID from raw bytes.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Generates a new random (version 4, variant 1) UUID.
    ///
    /// Fills 16 bytes from the operating system CSPRNG, then stamps the
    /// version nibble of byte 6 and the variant bits of byte 8. A failure
    /// of the random source panics; there is no meaningful recovery.
    #[must_use]
    pub fn new_v4() -> Self {
        let mut bytes = [0u8; 16];
        OsRng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the UUID, returning its bytes.
    #[inline]
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates a UUID from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::WrongBlobLength`] unless the slice is exactly
    /// 16 bytes.
    pub fn from_slice(slice: &[u8]) -> CodecResult<Self> {
        if slice.len() == 16 {
            let mut bytes = [0u8; 16];
            bytes.copy_from_slice(slice);
            Ok(Self(bytes))
        } else {
            Err(CodecError::WrongBlobLength {
                length: slice.len(),
            })
        }
    }

    /// Renders the canonical 36-character hyphenated lower-case form.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        format_canonical(&self.0)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self.to_canonical_string())
    }
}

impl FromStr for Uuid {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        parse_loose(s)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}
