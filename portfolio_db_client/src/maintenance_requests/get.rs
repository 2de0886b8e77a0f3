//! Maintenance request fetch-by-id operations.

use bson::doc;
use models_portfolio::MaintenanceRequest;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Fetches a single maintenance request by id.
#[tracing::instrument(skip(db))]
pub async fn get_maintenance_request(db: &Database, id: &str) -> Result<MaintenanceRequest> {
    let document = super::collection(db)
        .find_one(doc! { "_id": id })
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to query maintenance request");
            PortfolioDatabaseError::Query(e)
        })?;

    document
        .map(MaintenanceRequest::from)
        .ok_or_else(|| PortfolioDatabaseError::NotFound {
            collection: super::COLLECTION,
            id: id.to_string(),
        })
}
