//! Per-request permission checks.
//!
//! The role on the access token is only a hint; every check reloads the user
//! document so role changes and assignment edits take effect without waiting
//! for token expiry.

use axum::http::StatusCode;
use model_user::{Role, User, UserContext};
use mongodb::Database;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::visibility::VisibilityScope;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("forbidden")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),
}

impl PermissionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PermissionError::Forbidden => StatusCode::FORBIDDEN,
            // A valid token for a user that no longer exists is a dead session
            PermissionError::Database(e) if e.is_not_found() => StatusCode::UNAUTHORIZED,
            PermissionError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Load the caller's user record.
pub async fn caller(db: &Database, ctx: &UserContext) -> Result<User, PermissionError> {
    Ok(portfolio_db_client::users::get::get_user(db, &ctx.user_id).await?)
}

/// The caller's visibility scope, derived from their stored record.
pub async fn caller_scope(
    db: &Database,
    ctx: &UserContext,
) -> Result<VisibilityScope, PermissionError> {
    let user = caller(db, ctx).await?;
    Ok(VisibilityScope::for_user(&user))
}

/// Gate for the user-management surface.
pub async fn require_superadmin(db: &Database, ctx: &UserContext) -> Result<(), PermissionError> {
    let user = caller(db, ctx).await?;
    if user.role == Role::Superadmin {
        Ok(())
    } else {
        tracing::warn!(user_id = %ctx.user_id, "non-superadmin hit a superadmin route");
        Err(PermissionError::Forbidden)
    }
}

/// Gate for writes against a specific property's records.
pub fn ensure_property_access(
    scope: &VisibilityScope,
    property_id: &str,
) -> Result<(), PermissionError> {
    if scope.allows_property(property_id) {
        Ok(())
    } else {
        Err(PermissionError::Forbidden)
    }
}
