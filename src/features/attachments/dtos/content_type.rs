use axum::http::HeaderValue;
use mime_guess::Mime;

use crate::shared::constants::DEFAULT_ATTACHMENT_EXTENSION;

const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// Result of looking an extension up in the MIME table
#[derive(Debug, Clone, PartialEq)]
pub enum ContentType {
    Known(Mime),
    /// No mapping for the extension
    Unknown,
}

impl ContentType {
    pub fn from_extension(extension: &str) -> Self {
        match mime_guess::from_ext(extension).first() {
            Some(mime) => ContentType::Known(mime),
            None => ContentType::Unknown,
        }
    }

    /// Content type for a client-supplied attachment filename
    pub fn from_filename(filename: &str) -> Self {
        Self::from_extension(extension_of(filename))
    }

    pub fn to_header_value(&self) -> HeaderValue {
        match self {
            ContentType::Known(mime) => HeaderValue::from_str(mime.as_ref())
                .unwrap_or_else(|_| HeaderValue::from_static(UNKNOWN_CONTENT_TYPE)),
            ContentType::Unknown => HeaderValue::from_static(UNKNOWN_CONTENT_TYPE),
        }
    }
}

/// Last dot-delimited segment, or `bin` when the name has no dot
pub fn extension_of(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((_, extension)) => extension,
        None => DEFAULT_ATTACHMENT_EXTENSION,
    }
}
