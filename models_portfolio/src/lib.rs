//! Portfolio Models
//!
//! This crate defines the data models for the portfolio system using a three-layer architecture:
//!
//! - **shared**: Service-facing entity types used across all layers
//! - **db**: Document layer types (used only by portfolio_db_client)
//! - **api**: API layer types (external-facing requests/responses)
//!
//! Date fields are `chrono::DateTime<Utc>` everywhere except the db layer,
//! where they round-trip through `bson::DateTime`.

pub mod api;
pub mod db;
pub mod shared;

// Re-export commonly used shared types for convenience
pub use shared::{
    ActivityEvent, ActivityKind, ActivitySeverity, DashboardRates, DashboardStats,
    EmergencyContact, MaintenanceCategory, MaintenancePriority, MaintenanceRequest,
    MaintenanceStatus, Payment, PaymentMethod, PaymentStatus, PaymentType, Property,
    PropertyStatus, PropertyType, Tenant, TenantStatus, UnitRecord,
};
