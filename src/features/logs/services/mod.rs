mod formatter;
mod html_formatter;

pub use formatter::{PlainTextFormatter, TranscriptFormatter};
pub use html_formatter::HtmlTranscriptFormatter;
