//! Host-facing conversion functions.
//!
//! These mirror the function set a database engine would register:
//! `uuid4()` / `gen_random_uuid()`, `uuid_str(X)`, `uuid_blob(X)` and a
//! version query. The registration mechanism itself belongs to the host;
//! this module is the boundary it wraps.

use crate::uuid::Uuid;
use crate::value::Value;

/// Outcome of a conversion function.
///
/// Malformed input does not raise an error at this layer; it yields
/// [`Outcome::Null`], which a SQL host renders as NULL. Together with the
/// `CodecResult` type used underneath, callers have the full tri-state of
/// value / no result / hard error, although this core never produces the
/// last one itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The function produced a value.
    Value(T),
    /// The input was malformed; no result.
    Null,
}

impl<T> Outcome<T> {
    /// Returns true for the no-result outcome.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Outcome::Null)
    }

    /// Converts into an `Option`, discarding the distinction from a host
    /// error (which this layer never produces).
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Null => None,
        }
    }
}

/// Generates a version-4 UUID as canonical text. Never fails.
#[must_use]
pub fn uuid4() -> String {
    Uuid::new_v4().to_canonical_string()
}

/// PostgreSQL-compatible alias for [`uuid4`].
#[must_use]
pub fn gen_random_uuid() -> String {
    uuid4()
}

/// Converts a text or blob input into canonical UUID text.
#[must_use]
pub fn uuid_str(input: &Value) -> Outcome<String> {
    match input.to_uuid() {
        Ok(uuid) => Outcome::Value(uuid.to_canonical_string()),
        Err(_) => Outcome::Null,
    }
}

/// Converts a text or blob input into the 16-byte blob form.
///
/// A well-formed 16-byte blob input passes through unchanged; no version or
/// variant bits are re-stamped.
#[must_use]
pub fn uuid_blob(input: &Value) -> Outcome<[u8; 16]> {
    match input.to_uuid() {
        Ok(uuid) => Outcome::Value(uuid.into_bytes()),
        Err(_) => Outcome::Null,
    }
}

/// Static build identifier for version queries.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
