mod thread;
mod thread_message;

pub use thread::{Thread, ThreadStatus};
pub use thread_message::{MessageType, ThreadMessage};
