//! Maintenance request entity shared across the db, service, and API layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Urgency of a maintenance request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Workflow state of a maintenance request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceStatus::Open => write!(f, "open"),
            MaintenanceStatus::InProgress => write!(f, "in-progress"),
            MaintenanceStatus::Completed => write!(f, "completed"),
            MaintenanceStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Trade category of a maintenance request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceCategory {
    Plumbing,
    Electrical,
    Hvac,
    Appliance,
    Structural,
    Other,
}

/// A maintenance request raised against a property.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MaintenanceRequest {
    pub id: String,
    pub property_id: String,
    /// The reporting tenant, when the request came from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    pub title: String,
    pub description: String,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub category: MaintenanceCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_the_kebab_case_wire_format() {
        assert_eq!(
            serde_json::to_string(&MaintenanceStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let status: MaintenanceStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, MaintenanceStatus::InProgress);
    }

    #[test]
    fn priority_ordering_follows_urgency() {
        assert!(MaintenancePriority::Urgent > MaintenancePriority::High);
        assert!(MaintenancePriority::High > MaintenancePriority::Medium);
        assert!(MaintenancePriority::Medium > MaintenancePriority::Low);
    }
}
