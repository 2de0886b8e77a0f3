//! Maintenance request document type and conversions.

use serde::{Deserialize, Serialize};

use crate::shared::{
    MaintenanceCategory, MaintenancePriority, MaintenanceRequest, MaintenanceStatus,
};

/// Raw maintenance request document as stored in the `maintenance_requests`
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRequestDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    pub title: String,
    pub description: String,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub category: MaintenanceCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<bson::DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
}

impl From<MaintenanceRequestDocument> for MaintenanceRequest {
    fn from(doc: MaintenanceRequestDocument) -> Self {
        MaintenanceRequest {
            id: doc.id,
            property_id: doc.property_id,
            tenant_id: doc.tenant_id,
            title: doc.title,
            description: doc.description,
            priority: doc.priority,
            status: doc.status,
            category: doc.category,
            assigned_to: doc.assigned_to,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
            completed_at: doc.completed_at.map(|d| d.to_chrono()),
            estimated_cost: doc.estimated_cost,
            actual_cost: doc.actual_cost,
        }
    }
}

impl From<MaintenanceRequest> for MaintenanceRequestDocument {
    fn from(request: MaintenanceRequest) -> Self {
        MaintenanceRequestDocument {
            id: request.id,
            property_id: request.property_id,
            tenant_id: request.tenant_id,
            title: request.title,
            description: request.description,
            priority: request.priority,
            status: request.status,
            category: request.category,
            assigned_to: request.assigned_to,
            created_at: bson::DateTime::from_chrono(request.created_at),
            updated_at: bson::DateTime::from_chrono(request.updated_at),
            completed_at: request.completed_at.map(bson::DateTime::from_chrono),
            estimated_cost: request.estimated_cost,
            actual_cost: request.actual_cost,
        }
    }
}
