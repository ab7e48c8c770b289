use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::threads::models::{Thread, ThreadMessage};

/// Read access to threads and their messages
#[async_trait]
pub trait ThreadStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Thread>>;

    /// Messages of `thread` in transcript order
    async fn messages(&self, thread: &Thread) -> Result<Vec<ThreadMessage>>;
}

/// Postgres-backed thread store
pub struct PgThreadStore {
    pool: PgPool,
}

impl PgThreadStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadStore for PgThreadStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Thread>> {
        sqlx::query_as::<_, Thread>(
            r#"
            SELECT id, thread_number, status, user_id, user_name, channel_id, created_at
            FROM threads
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get thread by ID: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn messages(&self, thread: &Thread) -> Result<Vec<ThreadMessage>> {
        sqlx::query_as::<_, ThreadMessage>(
            r#"
            SELECT
                id, thread_id, message_type, message_number, user_id, user_name, body,
                is_anonymous, role_name, attachments, use_legacy_format,
                dm_channel_id, dm_message_id, metadata, created_at
            FROM thread_messages
            WHERE thread_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(&thread.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch messages for thread {}: {:?}", thread.id, e);
            AppError::Database(e)
        })
    }
}
