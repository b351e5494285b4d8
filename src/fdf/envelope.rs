//! Fixed byte sequences of the FDF 1.2 envelope.
//!
//! Readers match these literally, so every byte (including line endings and
//! the binary comment after the header) is part of the format.

/// File header, binary marker comment and the opening of the catalog object.
pub const HEADER: &[u8] = b"%FDF-1.2\n%\xe2\xe3\xcf\xd3\r\n1 0 obj\n<<\n/FDF\n";

/// Opens the `/Fields` array.
pub const FIELDS_OPEN: &[u8] = b"<<\n/Fields [\n";

/// Closes the `/Fields` array.
pub const FIELDS_CLOSE: &[u8] = b"]\n";

/// Closes the FDF dictionary, the catalog dictionary and object 1.
pub const END_OBJ: &[u8] = b">>\n>>\nendobj\n";

/// Trailer pointing at object 1 as the document root.
pub const TRAILER: &[u8] = b"trailer\n\n<<\n/Root 1 0 R\n>>\n";

/// End-of-file marker.
pub const EOF: &[u8] = b"%%EOF\n\n";

/// Hidden flag set.
pub const HIDDEN_SET: &str = "/SetF 2";
/// Hidden flag cleared.
pub const HIDDEN_CLEAR: &str = "/ClrF 2";
/// Read-only flag set.
pub const READONLY_SET: &str = "/SetFf 1";
/// Read-only flag cleared.
pub const READONLY_CLEAR: &str = "/ClrFf 1";

/// Default token for `true` boolean values.
pub const BOOL_TRUE: &str = "Yes";
/// Default token for `false` boolean values.
pub const BOOL_FALSE: &str = "No";

/// The envelope of a document with no fields and no URL.
pub fn empty_document() -> Vec<u8> {
    [HEADER, FIELDS_OPEN, FIELDS_CLOSE, END_OBJ, TRAILER, EOF].concat()
}
