//! UTF-16BE encoding of text for FDF literal strings.
//!
//! Output starts with the byte-order marker `FE FF`. Every `(` or `)` code
//! unit is preceded by a backslash code unit (`00 5C`). Surrogate halves
//! never collide with `0x0028`/`0x0029`, so pairs are copied unit by unit.

use crate::error::Result;

/// UTF-16BE byte-order marker.
pub const BYTE_ORDER_MARK: [u8; 2] = [0xFE, 0xFF];

const BACKSLASH_UNIT: u16 = 0x005C;

/// Encode text as escaped UTF-16BE with a leading byte-order marker.
///
/// # Example
///
/// ```
/// use fdf_oxide::fdf::encode_text;
///
/// assert_eq!(encode_text("A"), vec![0xFE, 0xFF, 0x00, 0x41]);
/// assert_eq!(
///     encode_text("(A)"),
///     vec![0xFE, 0xFF, 0x00, 0x5C, 0x00, 0x28, 0x00, 0x41, 0x00, 0x5C, 0x00, 0x29]
/// );
/// ```
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + text.len() * 2);
    out.extend_from_slice(&BYTE_ORDER_MARK);
    for unit in text.encode_utf16() {
        if unit == u16::from(b'(') || unit == u16::from(b')') {
            out.extend_from_slice(&BACKSLASH_UNIT.to_be_bytes());
        }
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Encode UTF-8 bytes as escaped UTF-16BE.
///
/// Fails with [`crate::error::Error::Encoding`] when `bytes` is not valid
/// UTF-8; nothing is emitted in that case.
pub fn encode_utf8(bytes: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(bytes)?;
    Ok(encode_text(text))
}
