//! User list operations.

use futures::TryStreamExt;
use model_user::User;
use model_user::db::UserDocument;
use mongodb::Database;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Fetches all users, hashes stripped. Superadmin-only at the API layer.
#[tracing::instrument(skip(db))]
pub async fn list_users(db: &Database) -> Result<Vec<User>> {
    let cursor = super::collection(db)
        .find(bson::doc! {})
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to query users");
            PortfolioDatabaseError::Query(e)
        })?;
    let documents: Vec<UserDocument> = cursor.try_collect().await.map_err(|e| {
        tracing::error!(error = ?e, "failed to drain users cursor");
        PortfolioDatabaseError::Query(e)
    })?;

    Ok(documents.into_iter().map(User::from).collect())
}
