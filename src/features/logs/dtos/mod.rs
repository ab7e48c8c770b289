mod transcript_dto;

pub use transcript_dto::{FormattedTranscript, TranscriptOptions};
