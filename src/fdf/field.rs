//! Field values and the per-field dictionary entries of an FDF `/Fields` array.
//!
//! Two templates exist. Text values use the string template, where the value
//! is a literal string:
//!
//! ```text
//! <<
//! /V (value)
//! /T (name)
//! /ClrF 2
//! /ClrFf 1
//! >>
//! ```
//!
//! Boolean and token values use the data template, where the value follows
//! `/V/` directly with no parentheses. Names and values are encoded with
//! [`encode_text`]; the flag tokens are fixed ASCII.

use super::envelope::{HIDDEN_CLEAR, HIDDEN_SET, READONLY_CLEAR, READONLY_SET};
use super::escape::escape_name;
use super::unicode::encode_text;
use crate::config::{DataTokenEncoding, FdfOptions};
use crate::error::{Error, Result};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value, written as a literal string.
    Text(String),
    /// Boolean value (checkboxes), written as the configured yes/no token.
    Boolean(bool),
    /// Pre-serialized token such as a name reference, written after `/V/`.
    Other(String),
}

impl FieldValue {
    /// Create a token value from raw text, escaping it as a PDF name.
    ///
    /// ```
    /// use fdf_oxide::fdf::FieldValue;
    ///
    /// assert_eq!(FieldValue::name("Choice A"), FieldValue::Other("Choice#20A".into()));
    /// ```
    pub fn name(raw: &str) -> Self {
        let escaped = escape_name(raw.as_bytes());
        // Escaped names are pure ASCII.
        FieldValue::Other(String::from_utf8_lossy(&escaped).into_owned())
    }

    /// Short label of the value kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Other(_) => "other",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl TryFrom<Vec<u8>> for FieldValue {
    type Error = Error;

    /// UTF-8 bytes become a text value.
    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        let text = String::from_utf8(bytes).map_err(|e| Error::from(e.utf8_error()))?;
        Ok(FieldValue::Text(text))
    }
}

impl TryFrom<serde_json::Value> for FieldValue {
    type Error = Error;

    /// Strings map to text, booleans to booleans and numbers to tokens.
    /// Null, arrays and objects have no field representation.
    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(FieldValue::Text(s)),
            Value::Bool(b) => Ok(FieldValue::Boolean(b)),
            Value::Number(n) => Ok(FieldValue::Other(n.to_string())),
            Value::Null => Err(Error::InvalidValueKind("null".to_string())),
            Value::Array(_) => Err(Error::InvalidValueKind("array".to_string())),
            Value::Object(_) => Err(Error::InvalidValueKind("object".to_string())),
        }
    }
}

bitflags! {
    /// Display and interaction flags toggled for a field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldFlags: u8 {
        /// Field is hidden (`/SetF 2`)
        const HIDDEN = 1 << 0;
        /// Field is read-only (`/SetFf 1`)
        const READ_ONLY = 1 << 1;
    }
}

impl FieldFlags {
    /// Build flags from the two booleans.
    pub fn from_bools(is_hidden: bool, is_readonly: bool) -> Self {
        let mut flags = FieldFlags::empty();
        flags.set(FieldFlags::HIDDEN, is_hidden);
        flags.set(FieldFlags::READ_ONLY, is_readonly);
        flags
    }

    /// `/SetF 2` or `/ClrF 2`.
    pub fn hidden_token(self) -> &'static str {
        if self.contains(FieldFlags::HIDDEN) {
            HIDDEN_SET
        } else {
            HIDDEN_CLEAR
        }
    }

    /// `/SetFf 1` or `/ClrFf 1`.
    pub fn readonly_token(self) -> &'static str {
        if self.contains(FieldFlags::READ_ONLY) {
            READONLY_SET
        } else {
            READONLY_CLEAR
        }
    }
}

/// Encode one field as its dictionary entry.
///
/// Text values use the string template; booleans (mapped to the configured
/// token) and other tokens use the data template.
pub fn encode_field(
    name: &str,
    value: &FieldValue,
    flags: FieldFlags,
    options: &FdfOptions,
) -> Result<Vec<u8>> {
    match value {
        FieldValue::Text(text) => encode_string_field(name, text, flags),
        FieldValue::Boolean(b) => encode_data_field(name, options.bool_token(*b), flags, options),
        FieldValue::Other(token) => encode_data_field(name, token, flags, options),
    }
}

/// Encode a field with a literal string value.
pub fn encode_string_field(name: &str, value: &str, flags: FieldFlags) -> Result<Vec<u8>> {
    let mut entry = Vec::new();
    entry.write_all(b"<<\n/V (")?;
    entry.write_all(&encode_text(value))?;
    entry.write_all(b")\n")?;
    write_tail(&mut entry, name, flags)?;
    Ok(entry)
}

/// Encode a field whose value is a token written directly after `/V/`.
pub fn encode_data_field(
    name: &str,
    token: &str,
    flags: FieldFlags,
    options: &FdfOptions,
) -> Result<Vec<u8>> {
    let mut entry = Vec::new();
    entry.write_all(b"<<\n/V/")?;
    match options.data_token_encoding {
        DataTokenEncoding::Unicode => entry.write_all(&encode_text(token))?,
        DataTokenEncoding::Raw => entry.write_all(token.as_bytes())?,
    }
    entry.write_all(b"\n")?;
    write_tail(&mut entry, name, flags)?;
    Ok(entry)
}

/// Write `/T (name)`, the two flag tokens and the closing `>>`.
fn write_tail<W: Write>(w: &mut W, name: &str, flags: FieldFlags) -> std::io::Result<()> {
    w.write_all(b"/T (")?;
    w.write_all(&encode_text(name))?;
    w.write_all(b")\n")?;
    writeln!(w, "{}", flags.hidden_token())?;
    writeln!(w, "{}", flags.readonly_token())?;
    w.write_all(b">>\n")
}
