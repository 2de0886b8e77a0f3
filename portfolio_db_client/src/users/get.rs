//! User fetch operations.

use bson::doc;
use model_user::User;
use model_user::db::UserDocument;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Fetches a user by id, without the password hash.
#[tracing::instrument(skip(db))]
pub async fn get_user(db: &Database, id: &str) -> Result<User> {
    let document = super::collection(db)
        .find_one(doc! { "_id": id })
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to query user");
            PortfolioDatabaseError::Query(e)
        })?;

    document
        .map(User::from)
        .ok_or_else(|| PortfolioDatabaseError::NotFound {
            collection: super::COLLECTION,
            id: id.to_string(),
        })
}

/// Fetches the full user document, hash included, for credential
/// verification. Answers `None` rather than `NotFound` so sign-in can treat
/// unknown emails and bad passwords identically.
#[tracing::instrument(skip(db, email))]
pub async fn get_user_by_email(db: &Database, email: &str) -> Result<Option<UserDocument>> {
    let document = super::collection(db)
        .find_one(doc! { "email": email.to_lowercase() })
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to query user by email");
            PortfolioDatabaseError::Query(e)
        })?;

    Ok(document)
}
