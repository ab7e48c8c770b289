pub mod attachments;
pub mod logs;
pub mod threads;
pub mod tickets;
