//! Maintenance request list operations.

use futures::TryStreamExt;
use models_portfolio::MaintenanceRequest;
use models_portfolio::db::MaintenanceRequestDocument;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;
use crate::visibility::VisibilityScope;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Fetches every maintenance request whose property falls inside `scope`.
#[tracing::instrument(skip(db, scope))]
pub async fn list_maintenance_requests(
    db: &Database,
    scope: &VisibilityScope,
) -> Result<Vec<MaintenanceRequest>> {
    let cursor = super::collection(db)
        .find(scope.property_id_filter())
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to query maintenance requests");
            PortfolioDatabaseError::Query(e)
        })?;
    let documents: Vec<MaintenanceRequestDocument> = cursor.try_collect().await.map_err(|e| {
        tracing::error!(error = ?e, "failed to drain maintenance requests cursor");
        PortfolioDatabaseError::Query(e)
    })?;

    tracing::debug!(count = documents.len(), "listed maintenance requests");
    Ok(documents.into_iter().map(MaintenanceRequest::from).collect())
}
