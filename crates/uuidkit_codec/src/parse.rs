//! Loose UUID text parser.

use crate::error::{CodecError, CodecResult};
use crate::uuid::Uuid;

/// Parses a loosely formatted UUID string into its 16 bytes.
///
/// Accepted input is 32 hex digits of either case, optionally wrapped in a
/// single leading `{` and/or trailing `}`, with at most one `-` before each
/// two-digit byte group. Hyphens may sit anywhere between byte groups, not
/// just at the canonical positions, so all of these decode identically:
///
/// - `A0EEBC99-9C0B-4EF8-BB6D-6BB9BD380A11`
/// - `{a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11}`
/// - `a0eebc999c0b4ef8bb6d6bb9bd380a11`
/// - `a0ee-bc99-9c0b-4ef8-bb6d-6bb9-bd38-0a11`
/// - `{a0eebc99-9c0b4ef8-bb6d6bb9-bd380a11}`
///
/// The braces are independently optional: an opening `{` without a closing
/// `}` (and vice versa) is accepted. This matches the permissive input
/// handling of the PostgreSQL UUID functions and is intentional, not a
/// missing check.
///
/// # Errors
///
/// Fails if a hex digit is missing where one is required, if the input ends
/// before 16 bytes are decoded, or if any characters remain after the final
/// byte group and optional `}`.
pub fn parse_loose(input: &str) -> CodecResult<Uuid> {
    Cursor::new(input.as_bytes()).parse()
}

/// Bounds-checked cursor over the input bytes.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn parse(&mut self) -> CodecResult<Uuid> {
        let mut bytes = [0u8; 16];
        self.skip_if(b'{');
        for slot in &mut bytes {
            // At most one separator per byte group.
            self.skip_if(b'-');
            let hi = self.read_hex_digit()?;
            let lo = self.read_hex_digit()?;
            *slot = (hi << 4) | lo;
        }
        self.skip_if(b'}');
        if self.pos < self.data.len() {
            return Err(CodecError::TrailingCharacters { position: self.pos });
        }
        Ok(Uuid::from_bytes(bytes))
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    #[inline]
    fn skip_if(&mut self, expected: u8) {
        if self.peek() == Some(expected) {
            self.pos += 1;
        }
    }

    #[inline]
    fn read_hex_digit(&mut self) -> CodecResult<u8> {
        let byte = self.peek().ok_or(CodecError::UnexpectedEof)?;
        let nibble = hex_to_nibble(byte).ok_or(CodecError::InvalidHexDigit { position: self.pos })?;
        self.pos += 1;
        Ok(nibble)
    }
}

/// Translates one ASCII hex digit into its value, or `None` for anything else.
#[inline]
fn hex_to_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11";
    const BYTES: [u8; 16] = [
        0xa0, 0xee, 0xbc, 0x99, 0x9c, 0x0b, 0x4e, 0xf8, 0xbb, 0x6d, 0x6b, 0xb9, 0xbd, 0x38, 0x0a,
        0x11,
    ];

    #[test]
    fn parses_canonical_form() {
        assert_eq!(parse_loose(CANONICAL).unwrap().into_bytes(), BYTES);
    }

    #[test]
    fn parses_upper_case() {
        let upper = CANONICAL.to_uppercase();
        assert_eq!(parse_loose(&upper).unwrap().into_bytes(), BYTES);
    }

    #[test]
    fn parses_braced_form() {
        let braced = format!("{{{CANONICAL}}}");
        assert_eq!(parse_loose(&braced).unwrap().into_bytes(), BYTES);
    }

    #[test]
    fn parses_bare_hex() {
        assert_eq!(
            parse_loose("a0eebc999c0b4ef8bb6d6bb9bd380a11")
                .unwrap()
                .into_bytes(),
            BYTES
        );
    }

    #[test]
    fn parses_hyphens_at_any_group_boundary() {
        assert_eq!(
            parse_loose("a0ee-bc99-9c0b-4ef8-bb6d-6bb9-bd38-0a11")
                .unwrap()
                .into_bytes(),
            BYTES
        );
        assert_eq!(
            parse_loose("{a0eebc99-9c0b4ef8-bb6d6bb9-bd380a11}")
                .unwrap()
                .into_bytes(),
            BYTES
        );
        // Leading hyphen before the first group is tolerated too.
        assert_eq!(
            parse_loose("-a0eebc999c0b4ef8bb6d6bb9bd380a11")
                .unwrap()
                .into_bytes(),
            BYTES
        );
    }

    #[test]
    fn braces_need_not_be_paired() {
        assert_eq!(
            parse_loose("{a0eebc999c0b4ef8bb6d6bb9bd380a11")
                .unwrap()
                .into_bytes(),
            BYTES
        );
        assert_eq!(
            parse_loose("a0eebc999c0b4ef8bb6d6bb9bd380a11}")
                .unwrap()
                .into_bytes(),
            BYTES
        );
    }

    #[test]
    fn rejects_hyphen_inside_byte_group() {
        // The two digits of one byte must be contiguous.
        assert!(matches!(
            parse_loose("a-0eebc999c0b4ef8bb6d6bb9bd380a11"),
            Err(CodecError::InvalidHexDigit { .. })
        ));
    }

    #[test]
    fn rejects_double_hyphen() {
        assert!(matches!(
            parse_loose("a0ee--bc999c0b4ef8bb6d6bb9bd380a11"),
            Err(CodecError::InvalidHexDigit { .. })
        ));
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(
            parse_loose("a0eebc999c0b4ef8bb6d6bb9bd380a"),
            Err(CodecError::UnexpectedEof)
        );
        assert_eq!(parse_loose(""), Err(CodecError::UnexpectedEof));
        assert_eq!(parse_loose("{"), Err(CodecError::UnexpectedEof));
    }

    #[test]
    fn rejects_long_input() {
        assert!(matches!(
            parse_loose("a0eebc999c0b4ef8bb6d6bb9bd380a11ff"),
            Err(CodecError::TrailingCharacters { .. })
        ));
    }

    #[test]
    fn rejects_garbage_after_closing_brace() {
        assert!(matches!(
            parse_loose("{a0eebc999c0b4ef8bb6d6bb9bd380a11}x"),
            Err(CodecError::TrailingCharacters { .. })
        ));
        // Only one closing brace is consumed.
        assert!(matches!(
            parse_loose("a0eebc999c0b4ef8bb6d6bb9bd380a11}}"),
            Err(CodecError::TrailingCharacters { .. })
        ));
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(matches!(
            parse_loose("not-a-uuid"),
            Err(CodecError::InvalidHexDigit { .. })
        ));
        assert!(matches!(
            parse_loose("g0eebc999c0b4ef8bb6d6bb9bd380a11"),
            Err(CodecError::InvalidHexDigit { .. })
        ));
    }

    #[test]
    fn rejects_hyphen_after_final_group() {
        assert!(matches!(
            parse_loose("a0eebc999c0b4ef8bb6d6bb9bd380a11-"),
            Err(CodecError::TrailingCharacters { .. })
        ));
    }

    #[test]
    fn accepts_any_version_and_variant_bits() {
        // No validation of version/variant on parse: all zero is fine.
        assert!(parse_loose("00000000-0000-0000-0000-000000000000").is_ok());
    }
}
