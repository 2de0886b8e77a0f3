//! Tenant entity shared across the db, service, and API layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Lease status of a tenant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Pending,
    Expired,
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenantStatus::Active => write!(f, "active"),
            TenantStatus::Pending => write!(f, "pending"),
            TenantStatus::Expired => write!(f, "expired"),
        }
    }
}

/// Who to call when the tenant cannot be reached.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// A tenant and their current lease terms.
///
/// The lease itself is not a separate entity: lease views are projections of
/// tenants, and lease renewal/termination are tenant updates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Tenant {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// The property the tenant leases in. Not referentially checked against
    /// the properties collection.
    pub property_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    pub lease_start: DateTime<Utc>,
    pub lease_end: DateTime<Utc>,
    pub rent_amount: f64,
    pub deposit_amount: f64,
    pub status: TenantStatus,
    pub emergency_contact: EmergencyContact,
}

impl Tenant {
    /// Full display name.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
