//! Session tokens and credentials for the portfolio service.
//!
//! Covers the whole auth surface: HS256 access tokens with audience/issuer
//! validation, Argon2id password hashing, bearer-header extraction, and the
//! axum middleware that turns a valid token into a [`model_user::UserContext`]
//! request extension.

pub mod error;
pub mod headers;
pub mod jwt;
pub mod middleware;
pub mod password;
