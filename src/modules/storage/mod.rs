//! Storage module for attachment files
//!
//! Maps validated attachment ids to files in the local attachment directory.

mod local_attachment_store;

pub use local_attachment_store::{AttachmentId, AttachmentStore, LocalAttachmentStore};
