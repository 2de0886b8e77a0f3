//! Payment update operations, typically settling a pending payment.

use bson::{Document, doc};
use models_portfolio::Payment;
use models_portfolio::api::UpdatePayment;
use mongodb::Database;
use mongodb::options::ReturnDocument;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Merges the set fields of `update` into an existing payment and returns
/// the updated record.
#[tracing::instrument(skip(db, update))]
pub async fn update_payment(db: &Database, id: &str, update: UpdatePayment) -> Result<Payment> {
    let set = set_document(update)?;
    if set.is_empty() {
        // An empty $set is a store error; answer with the current record
        let current = super::collection(db)
            .find_one(doc! { "_id": id })
            .await
            .map_err(PortfolioDatabaseError::Query)?;
        return current
            .map(Payment::from)
            .ok_or_else(|| PortfolioDatabaseError::NotFound {
                collection: super::COLLECTION,
                id: id.to_string(),
            });
    }

    let updated = super::collection(db)
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
        .return_document(ReturnDocument::After)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to update payment");
            PortfolioDatabaseError::Query(e)
        })?;

    let document = updated.ok_or_else(|| PortfolioDatabaseError::NotFound {
        collection: super::COLLECTION,
        id: id.to_string(),
    })?;

    tracing::info!(id = %id, "updated payment");
    Ok(Payment::from(document))
}

fn set_document(update: UpdatePayment) -> Result<Document> {
    let mut set = Document::new();
    if let Some(amount) = update.amount {
        set.insert("amount", amount);
    }
    if let Some(status) = update.status {
        set.insert("status", bson::to_bson(&status)?);
    }
    if let Some(due_date) = update.due_date {
        set.insert("due_date", bson::DateTime::from_chrono(due_date));
    }
    if let Some(paid_date) = update.paid_date {
        set.insert("paid_date", bson::DateTime::from_chrono(paid_date));
    }
    if let Some(description) = update.description {
        set.insert("description", description);
    }
    if let Some(method) = update.method {
        set.insert("method", bson::to_bson(&method)?);
    }
    Ok(set)
}
