mod ticket_service;

pub use ticket_service::{PgTicketStore, TicketStore};
