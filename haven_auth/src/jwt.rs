use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};
use model_user::{Role, User};

use crate::error::HavenAuthError;

/// How long an issued access token stays valid.
const TOKEN_TTL_SECONDS: u64 = 24 * 60 * 60;

/// Everything needed to issue and validate access tokens. Built once from
/// config and cloned into the router state.
#[derive(Clone)]
pub struct JwtValidationArgs {
    audience: String,
    issuer: String,
    secret: String,
}

impl JwtValidationArgs {
    pub fn new(audience: String, issuer: String, secret: String) -> Self {
        Self {
            audience,
            issuer,
            secret,
        }
    }

    /// create a new instance of Self with fixed test values
    pub fn new_testing() -> Self {
        Self {
            audience: "haven_testing".to_string(),
            issuer: "test.haven.local".to_string(),
            secret: "super_secret_key".to_string(),
        }
    }
}

/// Claims carried by a Haven access token.
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct AccessToken {
    /// The audience of the token
    pub aud: String,
    /// The expiration time of the token
    pub exp: usize,
    /// The issuer of the token
    pub iss: String,
    /// The user id of the signed-in user
    pub sub: String,
    /// The email the user signed in with
    pub email: String,
    /// The role the user held at sign-in. Role changes take effect on the
    /// next sign-in, not mid-session.
    pub role: Role,
}

/// Issue a signed access token for `user`, valid for 24 hours.
pub fn issue_access_token(
    user: &User,
    args: &JwtValidationArgs,
) -> Result<String, HavenAuthError> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|e| HavenAuthError::Other(e.into()))?
        .as_secs();

    let claims = AccessToken {
        aud: args.audience.clone(),
        exp: (now + TOKEN_TTL_SECONDS) as usize,
        iss: args.issuer.clone(),
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role,
    };

    encode(
        &jsonwebtoken::Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(args.secret.as_bytes()),
    )
    .map_err(|e| HavenAuthError::JwtValidationFailed {
        details: e.to_string(),
    })
}

/// Verify and decode an access token, checking signature, expiry, audience,
/// and issuer.
pub fn validate_access_token(
    access_token: &str,
    args: &JwtValidationArgs,
) -> Result<AccessToken, HavenAuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_audience(&[&args.audience]);
    validation.set_issuer(&[&args.issuer]);

    match decode::<AccessToken>(
        access_token,
        &DecodingKey::from_secret(args.secret.as_bytes()),
        &validation,
    ) {
        Ok(decoded) => Ok(decoded.claims),
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(HavenAuthError::JwtExpired),
            _ => Err(HavenAuthError::JwtValidationFailed {
                details: e.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use chrono::Utc;

    fn test_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Sarah Admin".to_string(),
            email: "sarah@example.com".to_string(),
            role: Role::Superadmin,
            assigned_properties: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_tokens_validate() -> anyhow::Result<()> {
        let args = JwtValidationArgs::new_testing();
        let token = issue_access_token(&test_user(), &args)?;

        let claims = validate_access_token(&token, &args)?;
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.email, "sarah@example.com");
        assert_eq!(claims.role, Role::Superadmin);

        Ok(())
    }

    #[test]
    fn wrong_audience_is_rejected() -> anyhow::Result<()> {
        let issuing = JwtValidationArgs::new("other_app".to_string(),
            "test.haven.local".to_string(),
            "super_secret_key".to_string());
        let token = issue_access_token(&test_user(), &issuing)?;

        let err = validate_access_token(&token, &JwtValidationArgs::new_testing())
            .err()
            .context("expected error")?;
        assert_eq!(err.to_string(), "jwt validation failed: InvalidAudience");

        Ok(())
    }

    #[test]
    fn wrong_secret_is_rejected() -> anyhow::Result<()> {
        let issuing = JwtValidationArgs::new(
            "haven_testing".to_string(),
            "test.haven.local".to_string(),
            "a_different_secret".to_string(),
        );
        let token = issue_access_token(&test_user(), &issuing)?;

        let result = validate_access_token(&token, &JwtValidationArgs::new_testing());
        assert!(matches!(
            result,
            Err(HavenAuthError::JwtValidationFailed { .. })
        ));

        Ok(())
    }

    #[test]
    fn expired_token_is_reported_as_expired() -> anyhow::Result<()> {
        let args = JwtValidationArgs::new_testing();

        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs() as usize;
        let claims = AccessToken {
            aud: "haven_testing".to_string(),
            exp: now - 10_000,
            iss: "test.haven.local".to_string(),
            sub: "u1".to_string(),
            email: "sarah@example.com".to_string(),
            role: Role::PropertyManager,
        };
        let token = encode(
            &jsonwebtoken::Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("super_secret_key".as_bytes()),
        )?;

        let err = validate_access_token(&token, &args)
            .err()
            .context("expected error")?;
        assert_eq!(err.to_string(), "jwt is expired");

        Ok(())
    }
}
