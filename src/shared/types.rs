use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::ERROR_CODE_MALFORMED_INPUT;

/// Structured error returned by the JSON API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code
    #[schema(example = "MALFORMED_INPUT")]
    pub error: String,
    /// Human-readable explanation
    pub message: String,
}

impl ErrorBody {
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self {
            error: ERROR_CODE_MALFORMED_INPUT.to_string(),
            message: message.into(),
        }
    }
}
