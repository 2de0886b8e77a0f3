use thiserror::Error;

/// Errors raised while authenticating a request or a credential.
#[derive(Debug, Error)]
pub enum HavenAuthError {
    #[error("jwt is expired")]
    JwtExpired,

    #[error("jwt validation failed: {details}")]
    JwtValidationFailed { details: String },

    #[error("no access token on request")]
    MissingToken,

    #[error("password hash error: {0}")]
    Crypto(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
