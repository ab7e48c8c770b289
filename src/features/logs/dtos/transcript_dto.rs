use crate::core::extractor::QueryFlags;

/// Rendering switches taken from the `/logs` query string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriptOptions {
    /// Hide bot and internal staff messages
    pub simple: bool,
    /// Include message numbers and DM channel/message ids
    pub verbose: bool,
}

impl From<QueryFlags> for TranscriptOptions {
    fn from(flags: QueryFlags) -> Self {
        Self {
            simple: flags.simple,
            verbose: flags.verbose,
        }
    }
}

/// Formatter output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTranscript {
    pub content: String,
    /// Falls back to plain text when `None`
    pub content_type: Option<String>,
}

impl FormattedTranscript {
    pub fn plain(content: String) -> Self {
        Self {
            content,
            content_type: None,
        }
    }
}
