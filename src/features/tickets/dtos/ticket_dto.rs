use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::core::extractor::QueryFlags;
use crate::features::threads::models::ThreadStatus;

pub const CONFLICTING_STATUS_FLAGS: &str = "Cannot have both open and closed parameters";

/// Status restriction for the ticket listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketFilter {
    All,
    Only(ThreadStatus),
}

impl TicketFilter {
    /// `open` and `closed` are mutually exclusive
    pub fn from_flags(flags: &QueryFlags) -> Result<Self> {
        match (flags.open, flags.closed) {
            (true, true) => Err(AppError::MalformedInput(
                CONFLICTING_STATUS_FLAGS.to_string(),
            )),
            (true, false) => Ok(TicketFilter::Only(ThreadStatus::Open)),
            (false, true) => Ok(TicketFilter::Only(ThreadStatus::Closed)),
            (false, false) => Ok(TicketFilter::All),
        }
    }

    pub fn status(self) -> Option<ThreadStatus> {
        match self {
            TicketFilter::All => None,
            TicketFilter::Only(status) => Some(status),
        }
    }
}

/// Number of tickets holding one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TicketStatsRow {
    /// 1 = open, 2 = closed
    #[schema(value_type = i32, example = 1)]
    pub status: ThreadStatus,
    pub count: i64,
}
