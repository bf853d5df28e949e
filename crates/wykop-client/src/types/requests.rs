/*
[INPUT]:  Caller-provided request payloads
[OUTPUT]: Typed request building blocks (POST fields, file attachments)
[POS]:    Data layer - type definitions for outgoing requests
[UPDATE]: When request shapes change
*/

use std::collections::BTreeMap;

/// POST fields of an API call, sorted by key
///
/// The ordering matters: the request signature covers the values in key
/// order.
pub type PostFields = BTreeMap<String, String>;

/// File attached to an API call, sent as a multipart part
///
/// File parts are excluded from the request signature; only the text fields
/// are signed.
#[derive(Debug, Clone)]
pub struct FileAttachment {
    /// Form field name, e.g. `embed`
    pub field: String,
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}
