//! Property list operations.

use futures::TryStreamExt;
use models_portfolio::Property;
use models_portfolio::db::PropertyDocument;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;
use crate::visibility::VisibilityScope;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Fetches every property visible in `scope`. The scope restriction is part
/// of the query filter, not a post-fetch pass.
#[tracing::instrument(skip(db, scope))]
pub async fn list_properties(db: &Database, scope: &VisibilityScope) -> Result<Vec<Property>> {
    let filter = scope.document_id_filter();

    let cursor = super::collection(db).find(filter).await.map_err(|e| {
        tracing::error!(error = ?e, "failed to query properties");
        PortfolioDatabaseError::Query(e)
    })?;
    let documents: Vec<PropertyDocument> = cursor.try_collect().await.map_err(|e| {
        tracing::error!(error = ?e, "failed to drain properties cursor");
        PortfolioDatabaseError::Query(e)
    })?;

    tracing::debug!(count = documents.len(), "listed properties");
    Ok(documents.into_iter().map(Property::from).collect())
}
