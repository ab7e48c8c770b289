use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Thread status as stored in the `threads.status` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Type)]
#[repr(i32)]
pub enum ThreadStatus {
    Open = 1,
    Closed = 2,
}

impl ThreadStatus {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(ThreadStatus::Open),
            2 => Some(ThreadStatus::Closed),
            _ => None,
        }
    }
}

// Serialized as the raw column value so API rows match the table
impl Serialize for ThreadStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for ThreadStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i32::deserialize(deserializer)?;
        ThreadStatus::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown thread status {}", code)))
    }
}

/// Database model for a modmail thread (a "ticket" in the API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Thread {
    pub id: String,
    pub thread_number: i32,
    /// 1 = open, 2 = closed
    #[schema(value_type = i32, example = 1)]
    pub status: ThreadStatus,
    pub user_id: String,
    pub user_name: String,
    pub channel_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
