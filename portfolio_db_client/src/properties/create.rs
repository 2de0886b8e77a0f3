//! Property insert operations.

use chrono::Utc;
use models_portfolio::Property;
use models_portfolio::api::CreateProperty;
use models_portfolio::db::PropertyDocument;
use mongodb::Database;
use uuid::Uuid;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Inserts a new property. The id and creation timestamp are generated here;
/// the caller supplies everything else.
#[tracing::instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_property(
    db: &Database,
    input: CreateProperty,
    created_by: &str,
) -> Result<Property> {
    let property = Property {
        id: Uuid::now_v7().to_string(),
        name: input.name,
        address: input.address,
        property_type: input.property_type,
        units: input.units,
        rent_amount: input.rent_amount,
        status: input.status,
        image_urls: input.image_urls,
        floor_plan_url: input.floor_plan_url,
        description: input.description,
        amenities: input.amenities,
        unit_records: input.unit_records,
        created_at: Utc::now(),
        created_by: created_by.to_string(),
    };

    super::collection(db)
        .insert_one(PropertyDocument::from(property.clone()))
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to insert property");
            PortfolioDatabaseError::Query(e)
        })?;

    tracing::info!(id = %property.id, "created property");
    Ok(property)
}
