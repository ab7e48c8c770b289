use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::threads::models::Thread;
use crate::features::tickets::dtos::{TicketFilter, TicketStatsRow};

/// Ticket listing and aggregate queries
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Tickets matching `filter`, highest thread number first
    async fn list(&self, filter: TicketFilter) -> Result<Vec<Thread>>;

    /// One row per distinct status
    async fn stats(&self) -> Result<Vec<TicketStatsRow>>;
}

/// `SELECT ... FROM threads [WHERE status = $1] ORDER BY thread_number DESC`
pub fn list_query(filter: TicketFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        "SELECT id, thread_number, status, user_id, user_name, channel_id, created_at FROM threads",
    );

    if let Some(status) = filter.status() {
        query.push(" WHERE status = ").push_bind(status.code());
    }

    query.push(" ORDER BY thread_number DESC");
    query
}

pub fn stats_query() -> QueryBuilder<'static, Postgres> {
    QueryBuilder::new("SELECT status, COUNT(id) AS count FROM threads GROUP BY status")
}

/// Postgres-backed ticket queries over the `threads` table
pub struct PgTicketStore {
    pool: PgPool,
}

impl PgTicketStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketStore for PgTicketStore {
    async fn list(&self, filter: TicketFilter) -> Result<Vec<Thread>> {
        list_query(filter)
            .build_query_as::<Thread>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list tickets ({:?}): {:?}", filter, e);
                AppError::Database(e)
            })
    }

    async fn stats(&self) -> Result<Vec<TicketStatsRow>> {
        stats_query()
            .build_query_as::<TicketStatsRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count tickets by status: {:?}", e);
                AppError::Database(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::threads::models::ThreadStatus;

    #[test]
    fn test_list_query_without_filter() {
        let query = list_query(TicketFilter::All);
        assert_eq!(
            query.sql(),
            "SELECT id, thread_number, status, user_id, user_name, channel_id, created_at \
             FROM threads ORDER BY thread_number DESC"
        );
    }

    #[test]
    fn test_list_query_with_status_binds_parameter() {
        let query = list_query(TicketFilter::Only(ThreadStatus::Open));
        assert_eq!(
            query.sql(),
            "SELECT id, thread_number, status, user_id, user_name, channel_id, created_at \
             FROM threads WHERE status = $1 ORDER BY thread_number DESC"
        );

        let closed = list_query(TicketFilter::Only(ThreadStatus::Closed));
        assert!(closed.sql().contains("WHERE status = $1"));
    }

    #[test]
    fn test_stats_query_groups_by_status() {
        assert_eq!(
            stats_query().sql(),
            "SELECT status, COUNT(id) AS count FROM threads GROUP BY status"
        );
    }
}
