//! Threads and their messages, as persisted by the modmail bot.
//!
//! The gateway never writes to these tables.

pub mod models;
pub mod services;

pub use services::{PgThreadStore, ThreadStore};
