//! Shared API response envelopes.

use serde::{Deserialize, Serialize};

/// Generic error envelope for non-2xx answers.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            message: message.into(),
        }
    }
}

/// Empty success envelope for operations with nothing to return.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmptyResponse {}
