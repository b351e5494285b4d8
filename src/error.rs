//! Error types for FDF generation.
//!
//! This module defines all error types that can occur while building and rendering
//! FDF documents.

/// Result type alias for FDF library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during FDF generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text could not be represented as 16-bit big-endian code units
    #[error("Encoding error at byte {offset}: {reason}")]
    Encoding {
        /// Byte offset of the first byte that could not be decoded
        offset: usize,
        /// Reason for the encoding failure
        reason: String,
    },

    /// Value does not map to a text, boolean or token field value
    #[error("Invalid field value kind: {0}")]
    InvalidValueKind(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding {
            offset: err.valid_up_to(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error() {
        let err = Error::Encoding {
            offset: 12,
            reason: "invalid utf-8 sequence".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Encoding error"));
        assert!(msg.contains("12"));
        assert!(msg.contains("invalid utf-8 sequence"));
    }

    #[test]
    fn test_invalid_value_kind_error() {
        let err = Error::InvalidValueKind("null".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid field value kind"));
        assert!(msg.contains("null"));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bytes = [b'o', b'k', 0xFF, b'!'];
        let utf8_err = std::str::from_utf8(&bytes).unwrap_err();
        match Error::from(utf8_err) {
            Error::Encoding { offset, .. } => assert_eq!(offset, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
