//! Forms Data Format (FDF) generation for pre-filling PDF form fields.
//!
//! An FDF file carries field names and values (plus hidden/read-only flags
//! and an optional target URL) without the PDF itself. Readers parse it
//! byte for byte, so the envelope and the escaping rules are exact:
//!
//! - Field names, text values and the URL are UTF-16BE with a byte-order
//!   marker, parentheses escaped as 16-bit units ([`encode_text`]).
//! - Boolean and token values use the data template (`/V/<token>`).
//! - [`escape_literal_string`] and [`escape_name`] are ASCII escapers for
//!   callers producing raw tokens; they are not applied to UTF-16 content.
//!
//! ## Example
//!
//! ```
//! use fdf_oxide::fdf::{FdfDocument, FieldValue, FormData};
//!
//! let data = FormData::new()
//!     .with_field("name", "John Doe")
//!     .with_field("agree", true)
//!     .with_field("color", FieldValue::name("Dark Blue"));
//! let doc = FdfDocument::new(data).with_hidden(["color"]);
//! let bytes = doc.render()?;
//! assert!(bytes.ends_with(b"%%EOF\n\n"));
//! # Ok::<(), fdf_oxide::error::Error>(())
//! ```

pub mod envelope;
mod escape;
mod fdf_writer;
mod field;
mod form_data;
mod unicode;

pub use escape::{escape_literal_string, escape_name};
pub use fdf_writer::FdfDocument;
pub use field::{encode_data_field, encode_field, encode_string_field, FieldFlags, FieldValue};
pub use form_data::{FlagSets, FormData};
pub use unicode::{encode_text, encode_utf8, BYTE_ORDER_MARK};
