//! User insert operations.

use chrono::Utc;
use model_user::{Role, User};
use model_user::db::UserDocument;
use mongodb::Database;
use uuid::Uuid;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Inserts a new user with the sign-up defaults: role `property_manager`,
/// no assigned properties. The email is stored lowercased.
#[tracing::instrument(skip_all)]
pub async fn create_user(
    db: &Database,
    name: &str,
    email: &str,
    password_hash: String,
) -> Result<User> {
    let document = UserDocument {
        id: Uuid::now_v7().to_string(),
        name: name.to_string(),
        email: email.to_lowercase(),
        role: Role::PropertyManager,
        assigned_properties: Vec::new(),
        password_hash,
        created_at: bson::DateTime::from_chrono(Utc::now()),
    };

    super::collection(db)
        .insert_one(&document)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to insert user");
            PortfolioDatabaseError::Query(e)
        })?;

    tracing::info!(id = %document.id, "created user");
    Ok(User::from(document))
}
