//! Property update operations.

use bson::{Document, doc};
use models_portfolio::Property;
use models_portfolio::api::UpdateProperty;
use mongodb::Database;
use mongodb::options::ReturnDocument;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Merges the set fields of `update` into an existing property and returns
/// the updated record. Unset fields are left untouched.
#[tracing::instrument(skip(db, update))]
pub async fn update_property(db: &Database, id: &str, update: UpdateProperty) -> Result<Property> {
    let set = set_document(update)?;
    if set.is_empty() {
        // Nothing to write; answer with the current record
        return super::get::get_property(db, id).await;
    }

    let updated = super::collection(db)
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
        .return_document(ReturnDocument::After)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to update property");
            PortfolioDatabaseError::Query(e)
        })?;

    let document = updated.ok_or_else(|| PortfolioDatabaseError::NotFound {
        collection: super::COLLECTION,
        id: id.to_string(),
    })?;

    tracing::info!(id = %id, "updated property");
    Ok(Property::from(document))
}

fn set_document(update: UpdateProperty) -> Result<Document> {
    let mut set = Document::new();
    if let Some(name) = update.name {
        set.insert("name", name);
    }
    if let Some(address) = update.address {
        set.insert("address", address);
    }
    if let Some(property_type) = update.property_type {
        set.insert("type", bson::to_bson(&property_type)?);
    }
    if let Some(units) = update.units {
        set.insert("units", i64::from(units));
    }
    if let Some(rent_amount) = update.rent_amount {
        set.insert("rent_amount", rent_amount);
    }
    if let Some(status) = update.status {
        set.insert("status", bson::to_bson(&status)?);
    }
    if let Some(image_urls) = update.image_urls {
        set.insert("image_urls", image_urls);
    }
    if let Some(floor_plan_url) = update.floor_plan_url {
        set.insert("floor_plan_url", floor_plan_url);
    }
    if let Some(description) = update.description {
        set.insert("description", description);
    }
    if let Some(amenities) = update.amenities {
        set.insert("amenities", amenities);
    }
    if let Some(unit_records) = update.unit_records {
        set.insert("unit_records", bson::to_bson(&unit_records)?);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models_portfolio::PropertyStatus;

    #[test]
    fn set_document_only_carries_set_fields() {
        let set = set_document(UpdateProperty {
            status: Some(PropertyStatus::Vacant),
            rent_amount: Some(950.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get_str("status").unwrap(), "vacant");
        assert_eq!(set.get_f64("rent_amount").unwrap(), 950.0);
    }

    #[test]
    fn empty_update_produces_empty_set() {
        let set = set_document(UpdateProperty::default()).unwrap();
        assert!(set.is_empty());
    }
}
