//! Portfolio Database Client
//!
//! This crate provides document-store access functions for the portfolio
//! service: one module per collection, translating between raw BSON
//! documents and the typed records in `models_portfolio`/`model_user`, with
//! role-based visibility pushed into the query filters.

pub mod error;
pub mod maintenance_requests;
pub mod payments;
pub mod properties;
pub mod tenants;
pub mod users;
pub mod visibility;
