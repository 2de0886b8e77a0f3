//! Payment list operations.

use futures::TryStreamExt;
use models_portfolio::Payment;
use models_portfolio::db::PaymentDocument;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;
use crate::visibility::VisibilityScope;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Fetches every payment whose property falls inside `scope`.
#[tracing::instrument(skip(db, scope))]
pub async fn list_payments(db: &Database, scope: &VisibilityScope) -> Result<Vec<Payment>> {
    let cursor = super::collection(db)
        .find(scope.property_id_filter())
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to query payments");
            PortfolioDatabaseError::Query(e)
        })?;
    let documents: Vec<PaymentDocument> = cursor.try_collect().await.map_err(|e| {
        tracing::error!(error = ?e, "failed to drain payments cursor");
        PortfolioDatabaseError::Query(e)
    })?;

    tracing::debug!(count = documents.len(), "listed payments");
    Ok(documents.into_iter().map(Payment::from).collect())
}
