//! Property delete operations.
//!
//! Properties are the only entity with a delete path; tenants, payments, and
//! maintenance requests stay on record.

use bson::doc;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Removes a property document.
#[tracing::instrument(skip(db))]
pub async fn delete_property(db: &Database, id: &str) -> Result<()> {
    let result = super::collection(db)
        .delete_one(doc! { "_id": id })
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to delete property");
            PortfolioDatabaseError::Query(e)
        })?;

    if result.deleted_count == 0 {
        return Err(PortfolioDatabaseError::NotFound {
            collection: super::COLLECTION,
            id: id.to_string(),
        });
    }

    tracing::info!(id = %id, "deleted property");
    Ok(())
}
