//! HTML transcripts rendered through minijinja.
//!
//! Entries are produced exactly like the plain-text transcript and then
//! HTML-escaped by the template engine, so message bodies can never inject
//! markup into the page.

use async_trait::async_trait;
use minijinja::{context, Environment};

use crate::core::error::{AppError, Result};
use crate::features::logs::dtos::{FormattedTranscript, TranscriptOptions};
use crate::features::logs::services::formatter::{
    transcript_entries, transcript_header, TranscriptFormatter,
};
use crate::features::threads::models::{Thread, ThreadMessage};

/// `.html` suffix turns on minijinja's HTML auto-escaping
const TEMPLATE_NAME: &str = "transcript.html";
const TEMPLATE_SOURCE: &str = include_str!("../../../../templates/transcript.html.jinja");
const HTML_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

pub struct HtmlTranscriptFormatter {
    env: Environment<'static>,
}

impl HtmlTranscriptFormatter {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE)
            .map_err(|e| AppError::Render(format!("Failed to load transcript template: {}", e)))?;
        Ok(Self { env })
    }
}

#[async_trait]
impl TranscriptFormatter for HtmlTranscriptFormatter {
    async fn format_log(
        &self,
        thread: &Thread,
        messages: &[ThreadMessage],
        options: TranscriptOptions,
    ) -> Result<FormattedTranscript> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| AppError::Render(e.to_string()))?;

        let content = template
            .render(context! {
                thread_number => thread.thread_number,
                header => transcript_header(thread),
                entries => transcript_entries(messages, options),
            })
            .map_err(|e| {
                AppError::Render(format!("Failed to render thread {}: {}", thread.id, e))
            })?;

        Ok(FormattedTranscript {
            content,
            content_type: Some(HTML_CONTENT_TYPE.to_string()),
        })
    }
}
