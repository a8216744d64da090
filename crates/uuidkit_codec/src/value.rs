//! Dynamic input value type.

use crate::error::{CodecError, CodecResult};
use crate::parse::parse_loose;
use crate::uuid::Uuid;

/// An input value supplied by a host, either text or a binary blob.
///
/// Database engines hand conversion functions loosely typed arguments; this
/// enum is the tagged form of that argument. [`Value::to_uuid`] is the single
/// normalization entry point used by every conversion operation, so text and
/// blob callers accept exactly the same set of input shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Absent value.
    Null,
    /// Text input, expected to hold a loosely formatted UUID.
    Text(String),
    /// Binary input, expected to be exactly 16 bytes.
    Bytes(Vec<u8>),
}

impl Value {
    /// Normalizes this value into a UUID.
    ///
    /// Text runs through the loose parser; a blob passes through unchanged
    /// when it is exactly 16 bytes. Null (or any future kind) is rejected.
    ///
    /// # Errors
    ///
    /// Returns the parser's error for malformed text,
    /// [`CodecError::WrongBlobLength`] for a blob of the wrong size, and
    /// [`CodecError::UnsupportedKind`] for a null value.
    pub fn to_uuid(&self) -> CodecResult<Uuid> {
        match self {
            Value::Text(text) => parse_loose(text),
            Value::Bytes(bytes) => Uuid::from_slice(bytes),
            Value::Null => Err(CodecError::UnsupportedKind {
                kind: self.kind_name(),
            }),
        }
    }

    /// Returns the name of this value's kind, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Text(_) => "text",
            Value::Bytes(_) => "blob",
        }
    }

    /// Check if this value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get this value as a string, if it is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as bytes, if it is a blob.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<[u8; 16]> for Value {
    fn from(b: [u8; 16]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<Uuid> for Value {
    fn from(uuid: Uuid) -> Self {
        Value::Bytes(uuid.into_bytes().to_vec())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_normalizes_through_parser() {
        let value = Value::from("A0EEBC99-9C0B-4EF8-BB6D-6BB9BD380A11");
        let uuid = value.to_uuid().unwrap();
        assert_eq!(uuid.to_string(), "a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11");
    }

    #[test]
    fn blob_passes_through_unchanged() {
        let bytes = [7u8; 16];
        let value = Value::from(bytes);
        assert_eq!(value.to_uuid().unwrap().into_bytes(), bytes);
    }

    #[test]
    fn wrong_length_blob_is_rejected() {
        assert_eq!(
            Value::Bytes(vec![0; 15]).to_uuid(),
            Err(CodecError::WrongBlobLength { length: 15 })
        );
        assert_eq!(
            Value::Bytes(vec![0; 17]).to_uuid(),
            Err(CodecError::WrongBlobLength { length: 17 })
        );
    }

    #[test]
    fn null_is_rejected() {
        assert_eq!(
            Value::Null.to_uuid(),
            Err(CodecError::UnsupportedKind { kind: "null" })
        );
    }

    #[test]
    fn value_accessors() {
        assert!(Value::Null.is_null());
        assert!(!Value::from("x").is_null());

        assert_eq!(Value::from("hello").as_text(), Some("hello"));
        assert_eq!(Value::from(vec![1u8, 2]).as_text(), None);

        assert_eq!(Value::from(vec![1u8, 2]).as_bytes(), Some(&[1u8, 2][..]));
        assert_eq!(Value::from("hello").as_bytes(), None);
    }

    #[test]
    fn kind_names() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::from("x").kind_name(), "text");
        assert_eq!(Value::from(vec![0u8]).kind_name(), "blob");
    }
}
