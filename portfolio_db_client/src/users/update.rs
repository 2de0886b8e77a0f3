//! User update operations.

use bson::{Document, doc};
use model_user::{UpdateUserRequest, User};
use mongodb::Database;
use mongodb::options::ReturnDocument;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Merges role and/or property assignments into an existing user and returns
/// the updated record.
#[tracing::instrument(skip(db, update))]
pub async fn update_user(db: &Database, id: &str, update: UpdateUserRequest) -> Result<User> {
    let mut set = Document::new();
    if let Some(role) = update.role {
        set.insert("role", bson::to_bson(&role)?);
    }
    if let Some(assigned_properties) = update.assigned_properties {
        set.insert("assigned_properties", assigned_properties);
    }
    if set.is_empty() {
        return super::get::get_user(db, id).await;
    }

    let updated = super::collection(db)
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
        .return_document(ReturnDocument::After)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to update user");
            PortfolioDatabaseError::Query(e)
        })?;

    let document = updated.ok_or_else(|| PortfolioDatabaseError::NotFound {
        collection: super::COLLECTION,
        id: id.to_string(),
    })?;

    tracing::info!(id = %id, "updated user");
    Ok(User::from(document))
}

/// Adds a single property to a user's assignment set. Used when a
/// property_manager creates a property, so the new record stays inside their
/// own visibility scope.
#[tracing::instrument(skip(db))]
pub async fn add_assigned_property(db: &Database, id: &str, property_id: &str) -> Result<()> {
    let result = super::collection(db)
        .update_one(
            doc! { "_id": id },
            doc! { "$addToSet": { "assigned_properties": property_id } },
        )
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to add property assignment");
            PortfolioDatabaseError::Query(e)
        })?;

    if result.matched_count == 0 {
        return Err(PortfolioDatabaseError::NotFound {
            collection: super::COLLECTION,
            id: id.to_string(),
        });
    }
    Ok(())
}
