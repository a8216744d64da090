//! # uuidkit codec
//!
//! RFC-4122 UUID generation, loose parsing, and canonical formatting.
//!
//! This crate provides the conversion core behind SQL-style UUID functions:
//! - Generate random version-4 UUIDs (variant 1, network byte order)
//! - Parse loosely formatted UUID text (any case, optional braces, hyphens
//!   anywhere between byte groups) into the canonical 16-byte form
//! - Render 16 bytes as the canonical 36-character lower-case string
//! - Normalize a text-or-blob host value through a single entry point
//!
//! ## Usage
//!
//! ```
//! use uuidkit_codec::{uuid_str, Outcome, Value};
//!
//! let input = Value::from("{a0eebc99-9c0b4ef8-bb6d6bb9-bd380a11}");
//! assert_eq!(
//!     uuid_str(&input),
//!     Outcome::Value("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11".to_string())
//! );
//!
//! // Malformed input is a soft failure: no result, not an error.
//! assert!(uuid_str(&Value::from("not-a-uuid")).is_null());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod format;
mod functions;
mod parse;
mod uuid;
mod value;

pub use error::{CodecError, CodecResult};
pub use format::format_canonical;
pub use functions::{gen_random_uuid, uuid4, uuid_blob, uuid_str, version, Outcome};
pub use parse::parse_loose;
pub use uuid::Uuid;
pub use value::Value;
