use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, Type};

/// Kind of entry in a thread, as stored in `thread_messages.message_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[repr(i32)]
pub enum MessageType {
    /// Pre-2018 logs: the whole transcript in a single body
    Legacy = 1,
    System = 2,
    Chat = 3,
    FromUser = 4,
    ToUser = 5,
    Command = 6,
    SystemToUser = 7,
    ReplyEdited = 8,
    ReplyDeleted = 9,
}

impl MessageType {
    /// Staff-side chatter hidden from simple transcripts
    pub fn is_internal(self) -> bool {
        matches!(
            self,
            MessageType::System | MessageType::SystemToUser | MessageType::Chat | MessageType::Command
        )
    }
}

/// Database model for one message of a thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ThreadMessage {
    pub id: i64,
    pub thread_id: String,
    pub message_type: MessageType,
    pub message_number: Option<i32>,
    pub user_id: Option<String>,
    pub user_name: String,
    pub body: String,
    pub is_anonymous: bool,
    pub role_name: Option<String>,
    /// Attachment URLs
    pub attachments: Json<Vec<String>>,
    pub use_legacy_format: bool,
    pub dm_channel_id: Option<String>,
    pub dm_message_id: Option<String>,
    pub metadata: Option<Json<serde_json::Value>>,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of a staff reply kept in the metadata of edit/delete entries
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OriginalReply {
    pub user_name: String,
    pub message_number: Option<i32>,
    pub body: String,
}

impl ThreadMessage {
    fn metadata_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.as_ref().and_then(|m| m.0.get(key))
    }

    /// `originalThreadMessage` of a REPLY_EDITED / REPLY_DELETED entry
    pub fn original_reply(&self) -> Option<OriginalReply> {
        self.metadata_value("originalThreadMessage")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// `newBody` of a REPLY_EDITED entry
    pub fn edited_body(&self) -> Option<&str> {
        self.metadata_value("newBody").and_then(|v| v.as_str())
    }
}
