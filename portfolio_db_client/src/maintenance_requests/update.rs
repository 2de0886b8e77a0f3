//! Maintenance request update operations.

use bson::{Document, doc};
use chrono::Utc;
use models_portfolio::{MaintenanceRequest, MaintenanceStatus};
use models_portfolio::api::UpdateMaintenanceRequest;
use mongodb::Database;
use mongodb::options::ReturnDocument;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Merges the set fields of `update` into an existing maintenance request.
/// `updated_at` is always re-stamped; moving to `completed` stamps
/// `completed_at` as well.
#[tracing::instrument(skip(db, update))]
pub async fn update_maintenance_request(
    db: &Database,
    id: &str,
    update: UpdateMaintenanceRequest,
) -> Result<MaintenanceRequest> {
    let set = set_document(update)?;

    let updated = super::collection(db)
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
        .return_document(ReturnDocument::After)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to update maintenance request");
            PortfolioDatabaseError::Query(e)
        })?;

    let document = updated.ok_or_else(|| PortfolioDatabaseError::NotFound {
        collection: super::COLLECTION,
        id: id.to_string(),
    })?;

    tracing::info!(id = %id, "updated maintenance request");
    Ok(MaintenanceRequest::from(document))
}

fn set_document(update: UpdateMaintenanceRequest) -> Result<Document> {
    let now = bson::DateTime::from_chrono(Utc::now());

    let mut set = Document::new();
    if let Some(title) = update.title {
        set.insert("title", title);
    }
    if let Some(description) = update.description {
        set.insert("description", description);
    }
    if let Some(priority) = update.priority {
        set.insert("priority", bson::to_bson(&priority)?);
    }
    if let Some(status) = update.status {
        set.insert("status", bson::to_bson(&status)?);
        if status == MaintenanceStatus::Completed {
            set.insert("completed_at", now);
        }
    }
    if let Some(category) = update.category {
        set.insert("category", bson::to_bson(&category)?);
    }
    if let Some(assigned_to) = update.assigned_to {
        set.insert("assigned_to", assigned_to);
    }
    if let Some(estimated_cost) = update.estimated_cost {
        set.insert("estimated_cost", estimated_cost);
    }
    if let Some(actual_cost) = update.actual_cost {
        set.insert("actual_cost", actual_cost);
    }
    set.insert("updated_at", now);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completing_a_request_stamps_completed_at() {
        let set = set_document(UpdateMaintenanceRequest {
            status: Some(MaintenanceStatus::Completed),
            actual_cost: Some(420.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(set.get_str("status").unwrap(), "completed");
        assert!(set.get_datetime("completed_at").is_ok());
        assert!(set.get_datetime("updated_at").is_ok());
    }

    #[test]
    fn non_terminal_updates_only_restamp_updated_at() {
        let set = set_document(UpdateMaintenanceRequest {
            assigned_to: Some("Mwangi & Sons".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert!(set.get_datetime("completed_at").is_err());
        assert!(set.get_datetime("updated_at").is_ok());
        assert_eq!(set.get_str("assigned_to").unwrap(), "Mwangi & Sons");
    }
}
