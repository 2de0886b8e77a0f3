//! Tenant document type and conversions.

use serde::{Deserialize, Serialize};

use crate::shared::{EmergencyContact, Tenant, TenantStatus};

/// Raw tenant document as stored in the `tenants` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub property_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    pub lease_start: bson::DateTime,
    pub lease_end: bson::DateTime,
    pub rent_amount: f64,
    pub deposit_amount: f64,
    pub status: TenantStatus,
    pub emergency_contact: EmergencyContact,
}

impl From<TenantDocument> for Tenant {
    fn from(doc: TenantDocument) -> Self {
        Tenant {
            id: doc.id,
            first_name: doc.first_name,
            last_name: doc.last_name,
            email: doc.email,
            phone: doc.phone,
            property_id: doc.property_id,
            unit_number: doc.unit_number,
            lease_start: doc.lease_start.to_chrono(),
            lease_end: doc.lease_end.to_chrono(),
            rent_amount: doc.rent_amount,
            deposit_amount: doc.deposit_amount,
            status: doc.status,
            emergency_contact: doc.emergency_contact,
        }
    }
}

impl From<Tenant> for TenantDocument {
    fn from(tenant: Tenant) -> Self {
        TenantDocument {
            id: tenant.id,
            first_name: tenant.first_name,
            last_name: tenant.last_name,
            email: tenant.email,
            phone: tenant.phone,
            property_id: tenant.property_id,
            unit_number: tenant.unit_number,
            lease_start: bson::DateTime::from_chrono(tenant.lease_start),
            lease_end: bson::DateTime::from_chrono(tenant.lease_end),
            rent_amount: tenant.rent_amount,
            deposit_amount: tenant.deposit_amount,
            status: tenant.status,
            emergency_contact: tenant.emergency_contact,
        }
    }
}
