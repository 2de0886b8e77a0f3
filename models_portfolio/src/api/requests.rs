//! API layer request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::error::{
    ValidationError, require, require_email, require_non_negative, require_positive,
};
use crate::shared::{
    EmergencyContact, MaintenanceCategory, MaintenancePriority, MaintenanceStatus, PaymentMethod,
    PaymentStatus, PaymentType, PropertyStatus, PropertyType, TenantStatus, UnitRecord,
};

// ===== Properties =====

/// Create a property. Id and creation timestamp are generated server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProperty {
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub units: u32,
    pub rent_amount: f64,
    pub status: PropertyStatus,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub floor_plan_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub unit_records: Vec<UnitRecord>,
}

impl CreateProperty {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("address", &self.address)?;
        if self.units == 0 {
            return Err(ValidationError::NotPositive { field: "units" });
        }
        require_positive("rent_amount", self.rent_amount)
    }
}

/// Merge-patch a property. Only the set fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_plan_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    /// Replaces the embedded unit list wholesale when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_records: Option<Vec<UnitRecord>>,
}

// ===== Tenants =====

/// Create a tenant. No delete counterpart exists; expired tenancies stay on
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTenant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub property_id: String,
    #[serde(default)]
    pub unit_number: Option<String>,
    pub lease_start: DateTime<Utc>,
    pub lease_end: DateTime<Utc>,
    pub rent_amount: f64,
    pub deposit_amount: f64,
    pub status: TenantStatus,
    pub emergency_contact: EmergencyContact,
}

impl CreateTenant {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)?;
        require_email("email", &self.email)?;
        require("property_id", &self.property_id)?;
        require_positive("rent_amount", self.rent_amount)?;
        require_non_negative("deposit_amount", self.deposit_amount)
    }
}

/// Merge-patch a tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTenant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TenantStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
}

// ===== Payments =====

/// Record a payment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePayment {
    pub tenant_id: String,
    pub property_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub paid_date: Option<DateTime<Utc>>,
    pub description: String,
    #[serde(default)]
    pub method: Option<PaymentMethod>,
}

impl CreatePayment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("tenant_id", &self.tenant_id)?;
        require("property_id", &self.property_id)?;
        require_positive("amount", self.amount)
    }
}

/// Merge-patch a payment, typically to settle it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePayment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
}

// ===== Maintenance =====

/// Open a maintenance request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMaintenanceRequest {
    pub property_id: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
    pub title: String,
    pub description: String,
    pub priority: MaintenancePriority,
    pub category: MaintenanceCategory,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
}

impl CreateMaintenanceRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("property_id", &self.property_id)?;
        require("title", &self.title)?;
        require("description", &self.description)
    }
}

/// Merge-patch a maintenance request. Setting status to `completed` stamps
/// `completed_at` server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMaintenanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<MaintenancePriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MaintenanceCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
}

// ===== Leases =====

/// Renew a tenant's lease. Forces the tenancy back to `active` even when it
/// had already expired.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenewLeaseRequest {
    pub new_lease_end: DateTime<Utc>,
    #[serde(default)]
    pub new_rent_amount: Option<f64>,
}

impl RenewLeaseRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.new_rent_amount {
            Some(amount) => require_positive("new_rent_amount", amount),
            None => Ok(()),
        }
    }
}

/// End a tenant's lease as of the effective date.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TerminateLeaseRequest {
    pub effective_date: DateTime<Utc>,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TerminateLeaseRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("reason", &self.reason)
    }
}

// ===== Search =====

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct SearchQueryParams {
    /// Case-insensitive substring matched against property names/addresses
    /// and tenant names/emails.
    pub query: String,
}
