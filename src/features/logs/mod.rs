//! Rendered thread transcripts served at `/logs/{thread_id}`.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use handlers::LogState;
pub use services::{HtmlTranscriptFormatter, PlainTextFormatter, TranscriptFormatter};
