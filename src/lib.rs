//! # FDF Oxide
//!
//! Forms Data Format (FDF) generation in Rust: pre-fill the fields of a PDF
//! form by shipping field values instead of the whole PDF.
//!
//! ## Core Features
//!
//! - **FDF 1.2 envelope**: byte-exact header, `/Fields` array, trailer and EOF marker
//! - **Unicode field text**: UTF-16BE with byte-order marker and paren escaping
//! - **Typed values**: text, boolean (checkbox) and pre-serialized token values
//! - **Field flags**: hidden (`/SetF 2`, `/ClrF 2`) and read-only (`/SetFf 1`, `/ClrFf 1`)
//! - **ASCII escapers**: PDF literal-string and name escaping for raw tokens
//!
//! Rendering is a pure function of an immutable [`fdf::FdfDocument`]; it does no
//! I/O and keeps no state between calls.
//!
//! ## Quick Start
//!
//! ```
//! use fdf_oxide::fdf::{FdfDocument, FormData};
//!
//! let data = FormData::new()
//!     .with_field("first_name", "Ada")
//!     .with_field("newsletter", false);
//! let doc = FdfDocument::new(data)
//!     .with_read_only(["first_name"])
//!     .with_url("https://example.com/signup.pdf");
//!
//! let fdf_bytes: Vec<u8> = doc.render()?;
//! assert!(fdf_bytes.starts_with(b"%FDF-1.2"));
//! # Ok::<(), fdf_oxide::error::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: a debug record per render, a trace
//! record per field and a warning for flagged names missing from the form data.
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// FDF generation
pub mod fdf;

pub use config::{DataTokenEncoding, FdfOptions};
pub use error::{Error, Result};
pub use fdf::{FdfDocument, FieldValue, FormData};
