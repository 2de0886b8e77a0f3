//! Shared entity types used across the db, service, and API layers.

mod activity;
mod maintenance;
mod payment;
mod property;
mod stats;
mod tenant;

pub use activity::{ActivityEvent, ActivityKind, ActivitySeverity};
pub use maintenance::{
    MaintenanceCategory, MaintenancePriority, MaintenanceRequest, MaintenanceStatus,
};
pub use payment::{Payment, PaymentMethod, PaymentStatus, PaymentType};
pub use property::{Property, PropertyStatus, PropertyType, UnitRecord};
pub use stats::{DashboardRates, DashboardStats};
pub use tenant::{EmergencyContact, Tenant, TenantStatus};
