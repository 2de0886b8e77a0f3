//! Database errors for portfolio operations

use thiserror::Error;

/// Errors that can occur during document-store operations
#[derive(Debug, Error)]
pub enum PortfolioDatabaseError {
    #[error("{collection} document {id} not found")]
    NotFound {
        collection: &'static str,
        id: String,
    },

    #[error("Failed to serialize document field: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("Query error: {0}")]
    Query(#[from] mongodb::error::Error),
}

impl PortfolioDatabaseError {
    /// Whether the error is a missing-document error, as opposed to a store
    /// failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortfolioDatabaseError::NotFound { .. })
    }
}
