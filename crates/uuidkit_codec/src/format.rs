//! Canonical UUID text rendering.

/// Hex digits used for canonical output.
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders 16 bytes as the canonical 36-character UUID string.
///
/// Output is always `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`: lower-case hex,
/// high nibble first, hyphens before the bytes at indices 4, 6, 8 and 10
/// (group lengths 8-4-4-4-12 in hex digits). This is a total function; every
/// byte sequence has a canonical rendering.
#[must_use]
pub fn format_canonical(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(36);
    for (i, &byte) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}
