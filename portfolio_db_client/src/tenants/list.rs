//! Tenant list operations.

use futures::TryStreamExt;
use models_portfolio::Tenant;
use models_portfolio::db::TenantDocument;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;
use crate::visibility::VisibilityScope;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Fetches every tenant whose property falls inside `scope`.
#[tracing::instrument(skip(db, scope))]
pub async fn list_tenants(db: &Database, scope: &VisibilityScope) -> Result<Vec<Tenant>> {
    let cursor = super::collection(db)
        .find(scope.property_id_filter())
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to query tenants");
            PortfolioDatabaseError::Query(e)
        })?;
    let documents: Vec<TenantDocument> = cursor.try_collect().await.map_err(|e| {
        tracing::error!(error = ?e, "failed to drain tenants cursor");
        PortfolioDatabaseError::Query(e)
    })?;

    tracing::debug!(count = documents.len(), "listed tenants");
    Ok(documents.into_iter().map(Tenant::from).collect())
}
