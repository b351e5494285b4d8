//! FDF (Forms Data Format) document assembly.
//!
//! Generates FDF 1.2 files that pre-fill the fields of a PDF form.

use super::envelope::{END_OBJ, EOF, FIELDS_CLOSE, FIELDS_OPEN, HEADER, TRAILER};
use super::field::{encode_field, FieldFlags};
use super::form_data::{FlagSets, FormData};
use super::unicode::encode_text;
use crate::config::FdfOptions;
use crate::error::Result;
use std::io::Write;

/// An FDF document: field values, flag sets and an optional target URL.
///
/// The document is built once and never changes afterwards. Rendering borrows
/// it immutably, so the same document can be rendered any number of times,
/// from any number of threads, with identical output.
///
/// # Example
///
/// ```
/// use fdf_oxide::fdf::{FdfDocument, FormData};
///
/// let data = FormData::new()
///     .with_field("name", "John Doe")
///     .with_field("subscribe", true);
/// let doc = FdfDocument::new(data)
///     .with_read_only(["name"])
///     .with_url("https://example.com/form.pdf");
///
/// let bytes = doc.render()?;
/// assert!(bytes.starts_with(b"%FDF-1.2\n"));
/// # Ok::<(), fdf_oxide::error::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FdfDocument {
    /// Field values in output order
    data: FormData,
    /// Hidden and read-only field names
    flags: FlagSets,
    /// Target PDF for the `/F` entry
    url: Option<String>,
}

impl FdfDocument {
    /// Create a document from form data, with no flags and no URL.
    pub fn new(data: FormData) -> Self {
        Self {
            data,
            flags: FlagSets::new(),
            url: None,
        }
    }

    /// Mark fields as read-only.
    pub fn with_read_only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags.extend_read_only(names);
        self
    }

    /// Mark fields as hidden.
    pub fn with_hidden<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags.extend_hidden(names);
        self
    }

    /// Replace both flag sets.
    pub fn with_flags(mut self, flags: FlagSets) -> Self {
        self.flags = flags;
        self
    }

    /// Set the URL of the PDF the data belongs to.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Field values.
    pub fn form_data(&self) -> &FormData {
        &self.data
    }

    /// Hidden and read-only names.
    pub fn flags(&self) -> &FlagSets {
        &self.flags
    }

    /// Target URL, if one was set.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Render the document with default options.
    pub fn render(&self) -> Result<Vec<u8>> {
        self.render_with(&FdfOptions::default())
    }

    /// Render the document.
    ///
    /// Fields are written in insertion order. An empty URL is treated as
    /// absent. On error no bytes are returned.
    pub fn render_with(&self, options: &FdfOptions) -> Result<Vec<u8>> {
        let url = self.url().filter(|u| !u.is_empty());
        log::debug!(
            "Rendering FDF with {} fields (url entry: {})",
            self.data.len(),
            url.is_some()
        );

        for name in self.flags.unmatched(&self.data) {
            log::warn!("Flagged field '{}' is not in the form data", name);
        }

        let mut output = Vec::new();
        output.write_all(HEADER)?;
        output.write_all(FIELDS_OPEN)?;

        for (name, value) in self.data.iter() {
            let flags: FieldFlags = self.flags.flags_for(name);
            log::trace!("Encoding {} field '{}' ({:?})", value.kind(), name, flags);
            output.write_all(&encode_field(name, value, flags, options)?)?;
        }

        if let Some(url) = url {
            write_url_entry(&mut output, url)?;
        }

        output.write_all(FIELDS_CLOSE)?;
        output.write_all(END_OBJ)?;
        output.write_all(TRAILER)?;
        output.write_all(EOF)?;

        log::debug!("Rendered FDF document: {} bytes", output.len());
        Ok(output)
    }
}

/// Write the `/F (url)` entry.
fn write_url_entry<W: Write>(w: &mut W, url: &str) -> std::io::Result<()> {
    w.write_all(b"/F (")?;
    w.write_all(&encode_text(url))?;
    w.write_all(b")\n")
}
