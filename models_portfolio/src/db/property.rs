//! Property document type and conversions.

use serde::{Deserialize, Serialize};

use crate::shared::{Property, PropertyStatus, PropertyType, UnitRecord};

/// Raw property document as stored in the `properties` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub units: u32,
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
    #[serde(default)]
    pub unit_records: Vec<UnitRecord>,
    pub created_at: bson::DateTime,
    pub created_by: String,
}

impl From<PropertyDocument> for Property {
    fn from(doc: PropertyDocument) -> Self {
        Property {
            id: doc.id,
            name: doc.name,
            address: doc.address,
            property_type: doc.property_type,
            units: doc.units,
            rent_amount: doc.rent_amount,
            status: doc.status,
            image_urls: doc.image_urls,
            floor_plan_url: doc.floor_plan_url,
            description: doc.description,
            amenities: doc.amenities,
            unit_records: doc.unit_records,
            created_at: doc.created_at.to_chrono(),
            created_by: doc.created_by,
        }
    }
}

impl From<Property> for PropertyDocument {
    fn from(property: Property) -> Self {
        PropertyDocument {
            id: property.id,
            name: property.name,
            address: property.address,
            property_type: property.property_type,
            units: property.units,
            rent_amount: property.rent_amount,
            status: property.status,
            image_urls: property.image_urls,
            floor_plan_url: property.floor_plan_url,
            description: property.description,
            amenities: property.amenities,
            unit_records: property.unit_records,
            created_at: bson::DateTime::from_chrono(property.created_at),
            created_by: property.created_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn dates_survive_the_document_round_trip() {
        let created = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let property = Property {
            id: "p1".to_string(),
            name: "Sunset Apartments".to_string(),
            address: "12 Hill Rd".to_string(),
            property_type: PropertyType::Residential,
            units: 8,
            rent_amount: 1200.0,
            status: PropertyStatus::Occupied,
            image_urls: vec![],
            floor_plan_url: None,
            description: None,
            amenities: vec!["parking".to_string()],
            unit_records: vec![],
            created_at: created,
            created_by: "u1".to_string(),
        };

        let doc = PropertyDocument::from(property.clone());
        // bson::DateTime has millisecond precision, which our timestamps fit
        let back = Property::from(doc);
        assert_eq!(back, property);
    }
}
