//! Tenant update operations. Lease renewal and termination go through here
//! as ordinary merge-patches built by the service.

use bson::{Document, doc};
use models_portfolio::Tenant;
use models_portfolio::api::UpdateTenant;
use mongodb::Database;
use mongodb::options::ReturnDocument;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Merges the set fields of `update` into an existing tenant and returns the
/// updated record.
#[tracing::instrument(skip(db, update))]
pub async fn update_tenant(db: &Database, id: &str, update: UpdateTenant) -> Result<Tenant> {
    let set = set_document(update)?;
    if set.is_empty() {
        return super::get::get_tenant(db, id).await;
    }

    let updated = super::collection(db)
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
        .return_document(ReturnDocument::After)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, id = %id, "failed to update tenant");
            PortfolioDatabaseError::Query(e)
        })?;

    let document = updated.ok_or_else(|| PortfolioDatabaseError::NotFound {
        collection: super::COLLECTION,
        id: id.to_string(),
    })?;

    tracing::info!(id = %id, "updated tenant");
    Ok(Tenant::from(document))
}

fn set_document(update: UpdateTenant) -> Result<Document> {
    let mut set = Document::new();
    if let Some(first_name) = update.first_name {
        set.insert("first_name", first_name);
    }
    if let Some(last_name) = update.last_name {
        set.insert("last_name", last_name);
    }
    if let Some(email) = update.email {
        set.insert("email", email);
    }
    if let Some(phone) = update.phone {
        set.insert("phone", phone);
    }
    if let Some(property_id) = update.property_id {
        set.insert("property_id", property_id);
    }
    if let Some(unit_number) = update.unit_number {
        set.insert("unit_number", unit_number);
    }
    if let Some(lease_start) = update.lease_start {
        set.insert("lease_start", bson::DateTime::from_chrono(lease_start));
    }
    if let Some(lease_end) = update.lease_end {
        set.insert("lease_end", bson::DateTime::from_chrono(lease_end));
    }
    if let Some(rent_amount) = update.rent_amount {
        set.insert("rent_amount", rent_amount);
    }
    if let Some(deposit_amount) = update.deposit_amount {
        set.insert("deposit_amount", deposit_amount);
    }
    if let Some(status) = update.status {
        set.insert("status", bson::to_bson(&status)?);
    }
    if let Some(emergency_contact) = update.emergency_contact {
        set.insert("emergency_contact", bson::to_bson(&emergency_contact)?);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use models_portfolio::TenantStatus;

    #[test]
    fn lease_renewal_patch_sets_end_rent_and_status() {
        let new_end = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        let set = set_document(UpdateTenant {
            lease_end: Some(new_end),
            rent_amount: Some(1050.0),
            status: Some(TenantStatus::Active),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.get_datetime("lease_end").unwrap().to_chrono(),
            new_end
        );
        assert_eq!(set.get_str("status").unwrap(), "active");
    }
}
