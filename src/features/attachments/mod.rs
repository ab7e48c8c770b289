//! Attachment files served at `/attachments/{attachment_id}/{filename}`.

pub mod dtos;
pub mod handlers;
pub mod routes;

pub use handlers::AttachmentState;
