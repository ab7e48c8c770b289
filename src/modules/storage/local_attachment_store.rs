//! Attachment files on local disk
//!
//! Each attachment lives in a single directory under a file named after its
//! numeric id. The id is the only input that ever reaches the filesystem path.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::shared::validation::ATTACHMENT_ID_REGEX;

/// Attachment id that passed `^[0-9]+$`.
///
/// Kept as the original digit string: ids are never parsed to integers, so
/// leading zeros and ids wider than `u64` resolve to the same file the bot wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentId(String);

impl AttachmentId {
    pub fn parse(raw: &str) -> Option<Self> {
        ATTACHMENT_ID_REGEX
            .is_match(raw)
            .then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves attachment ids to local files
pub trait AttachmentStore: Send + Sync {
    fn local_path(&self, id: &AttachmentId) -> PathBuf;
}

pub struct LocalAttachmentStore {
    dir: PathBuf,
}

impl LocalAttachmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl AttachmentStore for LocalAttachmentStore {
    fn local_path(&self, id: &AttachmentId) -> PathBuf {
        self.dir.join(id.as_str())
    }
}
