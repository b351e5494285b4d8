//! Configuration for FDF rendering.

use crate::fdf::envelope::{BOOL_FALSE, BOOL_TRUE};

/// How the value of a data field (boolean or token) is written after `/V/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataTokenEncoding {
    /// Token content goes through the Unicode encoder like names and text values.
    #[default]
    Unicode,
    /// Token bytes are written verbatim.
    ///
    /// Use this for readers that expect plain PDF names such as `/V/Yes`.
    /// Callers are responsible for passing tokens that are already valid
    /// names (see [`crate::fdf::escape_name`]).
    Raw,
}

/// FDF rendering configuration.
#[derive(Debug, Clone)]
pub struct FdfOptions {
    /// Encoding of data field values.
    pub data_token_encoding: DataTokenEncoding,

    /// Token written for `true` boolean values.
    pub true_token: String,

    /// Token written for `false` boolean values.
    pub false_token: String,
}

impl Default for FdfOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl FdfOptions {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            data_token_encoding: DataTokenEncoding::Unicode,
            true_token: BOOL_TRUE.to_string(),
            false_token: BOOL_FALSE.to_string(),
        }
    }

    /// Set the encoding for data field values.
    pub fn with_data_token_encoding(mut self, encoding: DataTokenEncoding) -> Self {
        self.data_token_encoding = encoding;
        self
    }

    /// Set the tokens used for boolean values.
    pub fn with_bool_tokens(
        mut self,
        true_token: impl Into<String>,
        false_token: impl Into<String>,
    ) -> Self {
        self.true_token = true_token.into();
        self.false_token = false_token.into();
        self
    }

    /// Token for a boolean value.
    pub fn bool_token(&self, value: bool) -> &str {
        if value {
            &self.true_token
        } else {
            &self.false_token
        }
    }
}
