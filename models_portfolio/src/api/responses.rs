//! API layer response types.
//!
//! List endpoints answer with wrapper objects rather than bare arrays so the
//! client-side schema generator has something to hang a name on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::{
    ActivityEvent, DashboardRates, DashboardStats, MaintenanceRequest, Payment, Property, Tenant,
    TenantStatus,
};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PropertiesResponse {
    pub properties: Vec<Property>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct TenantsResponse {
    pub tenants: Vec<Tenant>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PaymentsResponse {
    pub payments: Vec<Payment>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRequestsResponse {
    pub requests: Vec<MaintenanceRequest>,
}

/// A lease view row: the lease-relevant projection of a tenant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LeaseRow {
    pub tenant_id: String,
    pub tenant_name: String,
    pub property_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    pub lease_start: DateTime<Utc>,
    pub lease_end: DateTime<Utc>,
    pub rent_amount: f64,
    pub deposit_amount: f64,
    pub status: TenantStatus,
}

impl From<&Tenant> for LeaseRow {
    fn from(tenant: &Tenant) -> Self {
        LeaseRow {
            tenant_id: tenant.id.clone(),
            tenant_name: tenant.name(),
            property_id: tenant.property_id.clone(),
            unit_number: tenant.unit_number.clone(),
            lease_start: tenant.lease_start,
            lease_end: tenant.lease_end,
            rent_amount: tenant.rent_amount,
            deposit_amount: tenant.deposit_amount,
            status: tenant.status,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LeasesResponse {
    pub leases: Vec<LeaseRow>,
}

/// Dashboard stats plus their display-level rate derivations.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DashboardReport {
    pub stats: DashboardStats,
    pub rates: DashboardRates,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ActivityFeedResponse {
    pub events: Vec<ActivityEvent>,
}

/// Everything a search query matched, scoped to the caller's visibility.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub properties: Vec<Property>,
    pub tenants: Vec<Tenant>,
}
