//! Portfolio Service library
//!
//! The HTTP service for the Haven property portfolio: CRUD over the
//! document-store collections, dashboard reports, search, auth, user
//! management, and media upload. Role-based visibility is enforced here on
//! every read and write; no client-side filtering is trusted.

pub mod api;
pub mod config;
pub mod domain;
pub mod telemetry;
