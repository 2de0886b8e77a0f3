//! Payment fetch-by-id operations.

use bson::doc;
use models_portfolio::Payment;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Fetches a single payment by id.
#[tracing::instrument(skip(db))]
pub async fn get_payment(db: &Database, id: &str) -> Result<Payment> {
    let document = super::collection(db)
        .find_one(doc! { "_id": id })
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to query payment");
            PortfolioDatabaseError::Query(e)
        })?;

    document
        .map(Payment::from)
        .ok_or_else(|| PortfolioDatabaseError::NotFound {
            collection: super::COLLECTION,
            id: id.to_string(),
        })
}
