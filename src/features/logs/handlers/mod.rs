mod log_handler;

pub use log_handler::{get_log, LogState};
