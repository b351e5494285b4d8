//! Escaping for raw ASCII content in PDF literal strings and names.
//!
//! Text that goes through [`super::unicode`] must not be passed here as well:
//! neither function is idempotent and applying one to its own output escapes
//! the escapes.

use std::io::Write;

/// Escape bytes for use inside a PDF literal string `( ... )`.
///
/// Backslash and both parentheses get a backslash prefix. Bytes outside
/// printable ASCII (`0x20..=0x7E`) are written as a 3-digit octal escape.
///
/// # Example
///
/// ```
/// use fdf_oxide::fdf::escape_literal_string;
///
/// assert_eq!(escape_literal_string(b"f(x)"), b"f\\(x\\)");
/// assert_eq!(escape_literal_string(b"a\nb"), b"a\\012b");
/// ```
pub fn escape_literal_string(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for &byte in data {
        match byte {
            b'\\' | b'(' | b')' => {
                out.push(b'\\');
                out.push(byte);
            },
            0x20..=0x7E => out.push(byte),
            _ => {
                // Writing into a Vec cannot fail.
                let _ = write!(out, "\\{:03o}", byte);
            },
        }
    }
    out
}

/// Escape bytes for use as the body of a PDF name (the part after `/`).
///
/// Bytes outside `0x21..=0x7E`, and `#` itself, are written as `#xx`.
///
/// # Example
///
/// ```
/// use fdf_oxide::fdf::escape_name;
///
/// assert_eq!(escape_name(b"a b"), b"a#20b");
/// assert_eq!(escape_name(b"No#1"), b"No#231");
/// ```
pub fn escape_name(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for &byte in data {
        match byte {
            b'#' => out.extend_from_slice(b"#23"),
            0x21..=0x7E => out.push(byte),
            _ => {
                let _ = write!(out, "#{:02X}", byte);
            },
        }
    }
    out
}
