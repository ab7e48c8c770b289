use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::logs::dtos::{FormattedTranscript, TranscriptOptions};
use crate::features::threads::models::{MessageType, Thread, ThreadMessage};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a thread and its messages into a transcript body
#[async_trait]
pub trait TranscriptFormatter: Send + Sync {
    async fn format_log(
        &self,
        thread: &Thread,
        messages: &[ThreadMessage],
        options: TranscriptOptions,
    ) -> Result<FormattedTranscript>;
}

/// Default formatter: one line (or block) of plain text per message
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

#[async_trait]
impl TranscriptFormatter for PlainTextFormatter {
    async fn format_log(
        &self,
        thread: &Thread,
        messages: &[ThreadMessage],
        options: TranscriptOptions,
    ) -> Result<FormattedTranscript> {
        let entries = transcript_entries(messages, options);
        let content = format!("{}\n\n{}", transcript_header(thread), entries.join("\n"));
        Ok(FormattedTranscript::plain(content))
    }
}

pub(crate) fn transcript_header(thread: &Thread) -> String {
    format!(
        "# Modmail thread #{} with {} ({}) started at {}. All times are in UTC+0.",
        thread.thread_number,
        thread.user_name,
        thread.user_id,
        thread.created_at.format(TIMESTAMP_FORMAT)
    )
}

/// Entries shown for `messages`, honoring `simple`
pub(crate) fn transcript_entries(
    messages: &[ThreadMessage],
    options: TranscriptOptions,
) -> Vec<String> {
    messages
        .iter()
        .filter(|m| !(options.simple && m.message_type.is_internal()))
        .map(|m| format_entry(m, options))
        .collect()
}

fn format_entry(message: &ThreadMessage, options: TranscriptOptions) -> String {
    let mut line = format!("[{}]", message.created_at.format(TIMESTAMP_FORMAT));

    if options.verbose {
        if let Some(channel_id) = &message.dm_channel_id {
            line.push_str(&format!(" [DM CHA {}]", channel_id));
        }
        if let Some(message_id) = &message.dm_message_id {
            line.push_str(&format!(" [DM MSG {}]", message_id));
        }
    }

    match message.message_type {
        // Legacy rows already hold a full rendered log
        MessageType::Legacy => return message.body.clone(),
        MessageType::FromUser => {
            line.push_str(&format!(" [FROM USER] [{}] {}", message.user_name, message.body));
        }
        MessageType::ToUser => {
            if options.verbose {
                line.push_str(&format!(
                    " [TO USER] [{}] [{}]",
                    message.message_number.unwrap_or(0),
                    message.user_name
                ));
            } else {
                line.push_str(&format!(" [TO USER] [{}]", message.user_name));
            }
            line.push_str(&staff_reply_text(message));
        }
        MessageType::System => line.push_str(&format!(" [BOT] {}", message.body)),
        MessageType::SystemToUser => line.push_str(&format!(" [BOT TO USER] {}", message.body)),
        MessageType::Chat => {
            line.push_str(&format!(" [CHAT] [{}] {}", message.user_name, message.body));
        }
        MessageType::Command => {
            line.push_str(&format!(" [COMMAND] [{}] {}", message.user_name, message.body));
        }
        MessageType::ReplyEdited => match message.original_reply() {
            Some(original) => {
                line.push_str(&format!(
                    " [REPLY EDITED] {} edited reply {}:",
                    original.user_name,
                    reply_number(original.message_number)
                ));
                line.push_str(&format!("\n\nBefore:\n{}", original.body));
                line.push_str(&format!(
                    "\n\nAfter:\n{}",
                    message.edited_body().unwrap_or_default()
                ));
            }
            None => line.push_str(&format!(" [REPLY EDITED] {}", message.body)),
        },
        MessageType::ReplyDeleted => match message.original_reply() {
            Some(original) => {
                line.push_str(&format!(
                    " [REPLY DELETED] {} deleted reply {}:",
                    original.user_name,
                    reply_number(original.message_number)
                ));
                line.push_str(&format!("\n\n{}", original.body));
            }
            None => line.push_str(&format!(" [REPLY DELETED] {}", message.body)),
        },
    }

    if !message.attachments.is_empty() {
        line.push_str("\n\n");
        line.push_str(&message.attachments.join("\n"));
    }

    line
}

fn staff_reply_text(message: &ThreadMessage) -> String {
    if message.use_legacy_format {
        // Pre-2.31 replies carry role and name inside the body
        return format!(" {}", message.body);
    }

    match (message.is_anonymous, &message.role_name) {
        (true, Some(role)) => format!(" (Anonymous) {}: {}", role, message.body),
        (true, None) => format!(" (Anonymous) Moderator: {}", message.body),
        (false, Some(role)) => format!(" ({}) {}: {}", role, message.user_name, message.body),
        (false, None) => format!(" {}: {}", message.user_name, message.body),
    }
}

fn reply_number(number: Option<i32>) -> String {
    number.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::threads::models::ThreadStatus;
    use crate::shared::test_helpers::{sample_message, sample_thread};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use sqlx::types::Json;

    fn at(hour: u32, minute: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
    }

    #[tokio::test]
    async fn test_header_and_basic_entries() {
        let mut thread = sample_thread("t-1", 12, ThreadStatus::Open);
        thread.user_name = "Dory".to_string();
        thread.user_id = "1001".to_string();
        thread.created_at = at(9, 0);

        let mut from_user = sample_message(&thread, 1, MessageType::FromUser, "hello");
        from_user.user_name = "Dory".to_string();
        from_user.created_at = at(9, 1);
        let mut reply = sample_message(&thread, 2, MessageType::ToUser, "hi there");
        reply.user_name = "Mod".to_string();
        reply.role_name = Some("Support".to_string());
        reply.created_at = at(9, 2);

        let transcript = PlainTextFormatter
            .format_log(&thread, &[from_user, reply], TranscriptOptions::default())
            .await
            .unwrap();

        assert_eq!(transcript.content_type, None);
        assert_eq!(
            transcript.content,
            "# Modmail thread #12 with Dory (1001) started at 2024-03-01 09:00:00. All times are in UTC+0.\n\n\
             [2024-03-01 09:01:00] [FROM USER] [Dory] hello\n\
             [2024-03-01 09:02:00] [TO USER] [Mod] (Support) Mod: hi there"
        );
    }

    #[test]
    fn test_simple_hides_internal_messages() {
        let thread = sample_thread("t-1", 1, ThreadStatus::Open);
        let messages = vec![
            sample_message(&thread, 1, MessageType::FromUser, "visible"),
            sample_message(&thread, 2, MessageType::Chat, "staff only"),
            sample_message(&thread, 3, MessageType::System, "bot note"),
            sample_message(&thread, 4, MessageType::Command, "!close"),
            sample_message(&thread, 5, MessageType::SystemToUser, "auto reply"),
            sample_message(&thread, 6, MessageType::ToUser, "answer"),
        ];

        let simple = transcript_entries(
            &messages,
            TranscriptOptions {
                simple: true,
                verbose: false,
            },
        );
        assert_eq!(simple.len(), 2);
        assert!(simple[0].contains("visible"));
        assert!(simple[1].contains("answer"));

        let full = transcript_entries(&messages, TranscriptOptions::default());
        assert_eq!(full.len(), 6);
    }

    #[test]
    fn test_verbose_adds_ids_and_reply_numbers() {
        let thread = sample_thread("t-1", 1, ThreadStatus::Open);
        let mut reply = sample_message(&thread, 1, MessageType::ToUser, "done");
        reply.user_name = "Mod".to_string();
        reply.message_number = Some(4);
        reply.dm_channel_id = Some("555".to_string());
        reply.dm_message_id = Some("777".to_string());
        reply.created_at = at(10, 0);

        let verbose = TranscriptOptions {
            simple: false,
            verbose: true,
        };
        assert_eq!(
            format_entry(&reply, verbose),
            "[2024-03-01 10:00:00] [DM CHA 555] [DM MSG 777] [TO USER] [4] [Mod] Mod: done"
        );
        assert_eq!(
            format_entry(&reply, TranscriptOptions::default()),
            "[2024-03-01 10:00:00] [TO USER] [Mod] Mod: done"
        );
    }

    #[test]
    fn test_staff_reply_variants() {
        let thread = sample_thread("t-1", 1, ThreadStatus::Open);
        let mut reply = sample_message(&thread, 1, MessageType::ToUser, "text");
        reply.user_name = "Mod".to_string();

        reply.is_anonymous = true;
        assert_eq!(staff_reply_text(&reply), " (Anonymous) Moderator: text");

        reply.role_name = Some("Admin".to_string());
        assert_eq!(staff_reply_text(&reply), " (Anonymous) Admin: text");

        reply.is_anonymous = false;
        assert_eq!(staff_reply_text(&reply), " (Admin) Mod: text");

        reply.use_legacy_format = true;
        assert_eq!(staff_reply_text(&reply), " text");
    }

    #[test]
    fn test_legacy_and_attachments() {
        let thread = sample_thread("t-1", 1, ThreadStatus::Open);
        let legacy = sample_message(&thread, 1, MessageType::Legacy, "whole old log");
        assert_eq!(format_entry(&legacy, TranscriptOptions::default()), "whole old log");

        let mut with_files = sample_message(&thread, 2, MessageType::FromUser, "see files");
        with_files.user_name = "Dory".to_string();
        with_files.created_at = at(11, 0);
        with_files.attachments = Json(vec![
            "https://logs.example/attachments/1/a.png".to_string(),
            "https://logs.example/attachments/2/b.txt".to_string(),
        ]);
        assert_eq!(
            format_entry(&with_files, TranscriptOptions::default()),
            "[2024-03-01 11:00:00] [FROM USER] [Dory] see files\n\n\
             https://logs.example/attachments/1/a.png\n\
             https://logs.example/attachments/2/b.txt"
        );
    }

    #[test]
    fn test_reply_edited_and_deleted() {
        let thread = sample_thread("t-1", 1, ThreadStatus::Open);
        let original = json!({ "user_name": "Mod", "message_number": 2, "body": "typo" });

        let mut edited = sample_message(&thread, 1, MessageType::ReplyEdited, "");
        edited.created_at = at(12, 0);
        edited.metadata = Some(Json(json!({
            "originalThreadMessage": original.clone(),
            "newBody": "fixed"
        })));
        assert_eq!(
            format_entry(&edited, TranscriptOptions::default()),
            "[2024-03-01 12:00:00] [REPLY EDITED] Mod edited reply 2:\n\nBefore:\ntypo\n\nAfter:\nfixed"
        );

        let mut deleted = sample_message(&thread, 2, MessageType::ReplyDeleted, "");
        deleted.created_at = at(12, 5);
        deleted.metadata = Some(Json(json!({ "originalThreadMessage": original })));
        assert_eq!(
            format_entry(&deleted, TranscriptOptions::default()),
            "[2024-03-01 12:05:00] [REPLY DELETED] Mod deleted reply 2:\n\ntypo"
        );

        deleted.metadata = None;
        deleted.body = "reply removed".to_string();
        assert_eq!(
            format_entry(&deleted, TranscriptOptions::default()),
            "[2024-03-01 12:05:00] [REPLY DELETED] reply removed"
        );
    }
}
