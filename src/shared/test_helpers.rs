//! In-memory collaborators and fixtures for handler and router tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use fake::{faker::name::en::Name, Fake};
use sqlx::types::Json;

use crate::core::error::{AppError, Result};
use crate::features::threads::models::{MessageType, Thread, ThreadMessage, ThreadStatus};
use crate::features::threads::ThreadStore;
use crate::features::tickets::dtos::{TicketFilter, TicketStatsRow};
use crate::features::tickets::TicketStore;

/// Thread with a random user name and a fixed creation time
pub fn sample_thread(id: &str, thread_number: i32, status: ThreadStatus) -> Thread {
    Thread {
        id: id.to_string(),
        thread_number,
        status,
        user_id: format!("{}", 100_000 + thread_number),
        user_name: Name().fake(),
        channel_id: Some(format!("{}", 900_000 + thread_number)),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    }
}

pub fn sample_message(
    thread: &Thread,
    id: i64,
    message_type: MessageType,
    body: &str,
) -> ThreadMessage {
    ThreadMessage {
        id,
        thread_id: thread.id.clone(),
        message_type,
        message_number: None,
        user_id: Some(thread.user_id.clone()),
        user_name: Name().fake(),
        body: body.to_string(),
        is_anonymous: false,
        role_name: None,
        attachments: Json(Vec::new()),
        use_legacy_format: false,
        dm_channel_id: None,
        dm_message_id: None,
        metadata: None,
        created_at: thread.created_at + chrono::Duration::minutes(id),
    }
}

/// Threads keyed by id, messages returned in insertion order
#[derive(Default)]
pub struct InMemoryThreadStore {
    threads: HashMap<String, (Thread, Vec<ThreadMessage>)>,
}

impl InMemoryThreadStore {
    pub fn with_thread(mut self, thread: Thread, messages: Vec<ThreadMessage>) -> Self {
        self.threads.insert(thread.id.clone(), (thread, messages));
        self
    }
}

#[async_trait]
impl ThreadStore for InMemoryThreadStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Thread>> {
        Ok(self.threads.get(id).map(|(thread, _)| thread.clone()))
    }

    async fn messages(&self, thread: &Thread) -> Result<Vec<ThreadMessage>> {
        Ok(self
            .threads
            .get(&thread.id)
            .map(|(_, messages)| messages.clone())
            .unwrap_or_default())
    }
}

/// Thread store whose every lookup fails
pub struct FailingThreadStore;

#[async_trait]
impl ThreadStore for FailingThreadStore {
    async fn find_by_id(&self, _id: &str) -> Result<Option<Thread>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn messages(&self, _thread: &Thread) -> Result<Vec<ThreadMessage>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Ticket store over a fixed set of threads; counts every query it answers
#[derive(Default)]
pub struct InMemoryTicketStore {
    threads: Vec<Thread>,
    queries: AtomicUsize,
}

impl InMemoryTicketStore {
    pub fn new(threads: Vec<Thread>) -> Self {
        Self {
            threads,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn list(&self, filter: TicketFilter) -> Result<Vec<Thread>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let mut threads: Vec<Thread> = self
            .threads
            .iter()
            .filter(|t| filter.status().map_or(true, |status| t.status == status))
            .cloned()
            .collect();
        threads.sort_by(|a, b| b.thread_number.cmp(&a.thread_number));
        Ok(threads)
    }

    async fn stats(&self) -> Result<Vec<TicketStatsRow>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let mut counts: BTreeMap<i32, (ThreadStatus, i64)> = BTreeMap::new();
        for thread in &self.threads {
            counts
                .entry(thread.status.code())
                .or_insert((thread.status, 0))
                .1 += 1;
        }

        Ok(counts
            .into_values()
            .map(|(status, count)| TicketStatsRow { status, count })
            .collect())
    }
}

/// Ticket store whose every query fails
pub struct FailingTicketStore;

#[async_trait]
impl TicketStore for FailingTicketStore {
    async fn list(&self, _filter: TicketFilter) -> Result<Vec<Thread>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn stats(&self) -> Result<Vec<TicketStatsRow>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}
