//! Tenant insert operations.

use models_portfolio::Tenant;
use models_portfolio::api::CreateTenant;
use models_portfolio::db::TenantDocument;
use mongodb::Database;
use uuid::Uuid;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Inserts a new tenant with a generated id.
#[tracing::instrument(skip(db, input), fields(property_id = %input.property_id))]
pub async fn create_tenant(db: &Database, input: CreateTenant) -> Result<Tenant> {
    let tenant = Tenant {
        id: Uuid::now_v7().to_string(),
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        phone: input.phone,
        property_id: input.property_id,
        unit_number: input.unit_number,
        lease_start: input.lease_start,
        lease_end: input.lease_end,
        rent_amount: input.rent_amount,
        deposit_amount: input.deposit_amount,
        status: input.status,
        emergency_contact: input.emergency_contact,
    };

    super::collection(db)
        .insert_one(TenantDocument::from(tenant.clone()))
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to insert tenant");
            PortfolioDatabaseError::Query(e)
        })?;

    tracing::info!(id = %tenant.id, "created tenant");
    Ok(tenant)
}
