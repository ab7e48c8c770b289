mod thread_store;

pub use thread_store::{PgThreadStore, ThreadStore};
