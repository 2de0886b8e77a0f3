//! Property entity shared across the db, service, and API layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Whether a property is let to residents or to businesses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Residential,
    Commercial,
}

/// Occupancy status of a property.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Occupied,
    Vacant,
    Maintenance,
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyStatus::Occupied => write!(f, "occupied"),
            PropertyStatus::Vacant => write!(f, "vacant"),
            PropertyStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// An individual unit inside a property. Stored embedded in the property
/// document, never addressed on its own.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UnitRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// A managed property.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Number of lettable units in the building.
    pub units: u32,
    /// Monthly asking rent for the property.
    pub rent_amount: f64,
    pub status: PropertyStatus,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_plan_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit_records: Vec<UnitRecord>,
    pub created_at: DateTime<Utc>,
    /// Id of the user that created the property.
    pub created_by: String,
}
