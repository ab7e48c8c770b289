//! Ticket listing and per-status counts under `/api/v1`.
//!
//! A ticket is a modmail thread seen through the JSON API.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{PgTicketStore, TicketStore};
