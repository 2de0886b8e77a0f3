//! Tenant fetch-by-id operations.

use bson::doc;
use models_portfolio::Tenant;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Fetches a single tenant by id.
#[tracing::instrument(skip(db))]
pub async fn get_tenant(db: &Database, id: &str) -> Result<Tenant> {
    let document = super::collection(db)
        .find_one(doc! { "_id": id })
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to query tenant");
            PortfolioDatabaseError::Query(e)
        })?;

    document
        .map(Tenant::from)
        .ok_or_else(|| PortfolioDatabaseError::NotFound {
            collection: super::COLLECTION,
            id: id.to_string(),
        })
}
