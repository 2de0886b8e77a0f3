//! Document layer types.
//!
//! These mirror the shared entity types one-to-one but carry `_id` keys and
//! `bson::DateTime` fields, which is what the store round-trips dates
//! through. Only `portfolio_db_client` should touch these.

mod maintenance;
mod payment;
mod property;
mod tenant;

pub use maintenance::MaintenanceRequestDocument;
pub use payment::PaymentDocument;
pub use property::PropertyDocument;
pub use tenant::TenantDocument;
