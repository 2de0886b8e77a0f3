//! Cached view of the portfolio.
//!
//! [`CachedPortfolio`] is what interactive callers hold: list calls read
//! through a per-collection [`CollectionCache`], creates invalidate the
//! cache on success, and updates/deletes take the optimistic
//! patch-rollback-reconcile path. The patch functions below mirror the
//! server's merge semantics so the cache shows the expected post-mutation
//! state while the request is in flight.

use anyhow::Result;
use models_portfolio::{MaintenanceRequest, Payment, Property, Tenant, TenantStatus};
use models_portfolio::api::{
    CreateMaintenanceRequest, CreatePayment, CreateProperty, CreateTenant, RenewLeaseRequest,
    TerminateLeaseRequest, UpdateMaintenanceRequest, UpdatePayment, UpdateProperty, UpdateTenant,
};

use crate::PortfolioServiceClient;
use crate::cache::CollectionCache;

pub struct CachedPortfolio {
    client: PortfolioServiceClient,
    properties_cache: CollectionCache<Property>,
    tenants_cache: CollectionCache<Tenant>,
    payments_cache: CollectionCache<Payment>,
    maintenance_cache: CollectionCache<MaintenanceRequest>,
}

impl CachedPortfolio {
    pub fn new(client: PortfolioServiceClient) -> Self {
        Self {
            client,
            properties_cache: CollectionCache::new(),
            tenants_cache: CollectionCache::new(),
            payments_cache: CollectionCache::new(),
            maintenance_cache: CollectionCache::new(),
        }
    }

    pub fn client(&self) -> &PortfolioServiceClient {
        &self.client
    }

    // ===== Properties =====

    pub async fn properties(&self) -> Result<Vec<Property>> {
        self.properties_cache
            .query(|| self.client.list_properties())
            .await
    }

    /// Create has no optimistic patch: the server generates the id and
    /// timestamp, so the cache just refetches on success.
    pub async fn create_property(&self, input: &CreateProperty) -> Result<Property> {
        let property = self.client.create_property(input).await?;
        self.properties_cache.invalidate();
        Ok(property)
    }

    pub async fn update_property(&self, id: &str, update: &UpdateProperty) -> Result<Property> {
        self.properties_cache
            .mutate(
                |entries| {
                    for entry in entries.iter_mut() {
                        if entry.id == id {
                            apply_property_update(entry, update);
                        }
                    }
                },
                || self.client.update_property(id, update),
            )
            .await
    }

    pub async fn delete_property(&self, id: &str) -> Result<()> {
        self.properties_cache
            .mutate(
                |entries| entries.retain(|p| p.id != id),
                || self.client.delete_property(id),
            )
            .await
    }

    // ===== Tenants =====

    pub async fn tenants(&self) -> Result<Vec<Tenant>> {
        self.tenants_cache
            .query(|| self.client.list_tenants())
            .await
    }

    pub async fn create_tenant(&self, input: &CreateTenant) -> Result<Tenant> {
        let tenant = self.client.create_tenant(input).await?;
        self.tenants_cache.invalidate();
        Ok(tenant)
    }

    pub async fn update_tenant(&self, id: &str, update: &UpdateTenant) -> Result<Tenant> {
        self.tenants_cache
            .mutate(
                |entries| {
                    for entry in entries.iter_mut() {
                        if entry.id == id {
                            apply_tenant_update(entry, update);
                        }
                    }
                },
                || self.client.update_tenant(id, update),
            )
            .await
    }

    /// Optimistically renews: the cached tenant flips to `active` with the
    /// new lease end (and rent, when given) before the server confirms.
    pub async fn renew_lease(&self, tenant_id: &str, request: &RenewLeaseRequest) -> Result<Tenant> {
        self.tenants_cache
            .mutate(
                |entries| {
                    for entry in entries.iter_mut() {
                        if entry.id == tenant_id {
                            entry.lease_end = request.new_lease_end;
                            if let Some(rent) = request.new_rent_amount {
                                entry.rent_amount = rent;
                            }
                            entry.status = TenantStatus::Active;
                        }
                    }
                },
                || self.client.renew_lease(tenant_id, request),
            )
            .await
    }

    pub async fn terminate_lease(
        &self,
        tenant_id: &str,
        request: &TerminateLeaseRequest,
    ) -> Result<Tenant> {
        self.tenants_cache
            .mutate(
                |entries| {
                    for entry in entries.iter_mut() {
                        if entry.id == tenant_id {
                            entry.lease_end = request.effective_date;
                            entry.status = TenantStatus::Expired;
                        }
                    }
                },
                || self.client.terminate_lease(tenant_id, request),
            )
            .await
    }

    // ===== Payments =====

    pub async fn payments(&self) -> Result<Vec<Payment>> {
        self.payments_cache
            .query(|| self.client.list_payments())
            .await
    }

    pub async fn create_payment(&self, input: &CreatePayment) -> Result<Payment> {
        let payment = self.client.create_payment(input).await?;
        self.payments_cache.invalidate();
        Ok(payment)
    }

    pub async fn update_payment(&self, id: &str, update: &UpdatePayment) -> Result<Payment> {
        self.payments_cache
            .mutate(
                |entries| {
                    for entry in entries.iter_mut() {
                        if entry.id == id {
                            apply_payment_update(entry, update);
                        }
                    }
                },
                || self.client.update_payment(id, update),
            )
            .await
    }

    // ===== Maintenance =====

    pub async fn maintenance_requests(&self) -> Result<Vec<MaintenanceRequest>> {
        self.maintenance_cache
            .query(|| self.client.list_maintenance_requests())
            .await
    }

    pub async fn create_maintenance_request(
        &self,
        input: &CreateMaintenanceRequest,
    ) -> Result<MaintenanceRequest> {
        let request = self.client.create_maintenance_request(input).await?;
        self.maintenance_cache.invalidate();
        Ok(request)
    }

    pub async fn update_maintenance_request(
        &self,
        id: &str,
        update: &UpdateMaintenanceRequest,
    ) -> Result<MaintenanceRequest> {
        self.maintenance_cache
            .mutate(
                |entries| {
                    for entry in entries.iter_mut() {
                        if entry.id == id {
                            apply_maintenance_update(entry, update);
                        }
                    }
                },
                || self.client.update_maintenance_request(id, update),
            )
            .await
    }
}

fn apply_property_update(property: &mut Property, update: &UpdateProperty) {
    if let Some(name) = &update.name {
        property.name = name.clone();
    }
    if let Some(address) = &update.address {
        property.address = address.clone();
    }
    if let Some(property_type) = update.property_type {
        property.property_type = property_type;
    }
    if let Some(units) = update.units {
        property.units = units;
    }
    if let Some(rent_amount) = update.rent_amount {
        property.rent_amount = rent_amount;
    }
    if let Some(status) = update.status {
        property.status = status;
    }
    if let Some(image_urls) = &update.image_urls {
        property.image_urls = image_urls.clone();
    }
    if let Some(floor_plan_url) = &update.floor_plan_url {
        property.floor_plan_url = Some(floor_plan_url.clone());
    }
    if let Some(description) = &update.description {
        property.description = Some(description.clone());
    }
    if let Some(amenities) = &update.amenities {
        property.amenities = amenities.clone();
    }
    if let Some(unit_records) = &update.unit_records {
        property.unit_records = unit_records.clone();
    }
}

fn apply_tenant_update(tenant: &mut Tenant, update: &UpdateTenant) {
    if let Some(first_name) = &update.first_name {
        tenant.first_name = first_name.clone();
    }
    if let Some(last_name) = &update.last_name {
        tenant.last_name = last_name.clone();
    }
    if let Some(email) = &update.email {
        tenant.email = email.clone();
    }
    if let Some(phone) = &update.phone {
        tenant.phone = phone.clone();
    }
    if let Some(property_id) = &update.property_id {
        tenant.property_id = property_id.clone();
    }
    if let Some(unit_number) = &update.unit_number {
        tenant.unit_number = Some(unit_number.clone());
    }
    if let Some(lease_start) = update.lease_start {
        tenant.lease_start = lease_start;
    }
    if let Some(lease_end) = update.lease_end {
        tenant.lease_end = lease_end;
    }
    if let Some(rent_amount) = update.rent_amount {
        tenant.rent_amount = rent_amount;
    }
    if let Some(deposit_amount) = update.deposit_amount {
        tenant.deposit_amount = deposit_amount;
    }
    if let Some(status) = update.status {
        tenant.status = status;
    }
    if let Some(emergency_contact) = &update.emergency_contact {
        tenant.emergency_contact = emergency_contact.clone();
    }
}

fn apply_payment_update(payment: &mut Payment, update: &UpdatePayment) {
    if let Some(amount) = update.amount {
        payment.amount = amount;
    }
    if let Some(status) = update.status {
        payment.status = status;
    }
    if let Some(due_date) = update.due_date {
        payment.due_date = due_date;
    }
    if let Some(paid_date) = update.paid_date {
        payment.paid_date = Some(paid_date);
    }
    if let Some(description) = &update.description {
        payment.description = description.clone();
    }
    if let Some(method) = update.method {
        payment.method = Some(method);
    }
}

fn apply_maintenance_update(request: &mut MaintenanceRequest, update: &UpdateMaintenanceRequest) {
    if let Some(title) = &update.title {
        request.title = title.clone();
    }
    if let Some(description) = &update.description {
        request.description = description.clone();
    }
    if let Some(priority) = update.priority {
        request.priority = priority;
    }
    if let Some(status) = update.status {
        request.status = status;
    }
    if let Some(category) = update.category {
        request.category = category;
    }
    if let Some(assigned_to) = &update.assigned_to {
        request.assigned_to = Some(assigned_to.clone());
    }
    if let Some(estimated_cost) = update.estimated_cost {
        request.estimated_cost = Some(estimated_cost);
    }
    if let Some(actual_cost) = update.actual_cost {
        request.actual_cost = Some(actual_cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use models_portfolio::{PropertyStatus, PropertyType};

    fn property() -> Property {
        Property {
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
            amenities: vec![],
            unit_records: vec![],
            created_at: Utc::now(),
            created_by: "u1".to_string(),
        }
    }

    #[test]
    fn property_patch_merges_only_set_fields() {
        let mut p = property();
        apply_property_update(
            &mut p,
            &UpdateProperty {
                status: Some(PropertyStatus::Vacant),
                rent_amount: Some(999.0),
                ..Default::default()
            },
        );
        assert_eq!(p.status, PropertyStatus::Vacant);
        assert_eq!(p.rent_amount, 999.0);
        // Untouched fields survive
        assert_eq!(p.name, "Sunset Apartments");
        assert_eq!(p.units, 8);
    }

    #[test]
    fn tenant_renewal_patch_mirrors_server_semantics() {
        let mut t = Tenant {
            id: "t1".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john@example.com".to_string(),
            phone: "0700000000".to_string(),
            property_id: "p1".to_string(),
            unit_number: None,
            lease_start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            lease_end: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            rent_amount: 900.0,
            deposit_amount: 900.0,
            status: TenantStatus::Expired,
            emergency_contact: models_portfolio::shared::EmergencyContact {
                name: "Jane Smith".to_string(),
                phone: "0711111111".to_string(),
                relationship: "spouse".to_string(),
            },
        };

        let new_end = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        apply_tenant_update(
            &mut t,
            &UpdateTenant {
                lease_end: Some(new_end),
                status: Some(TenantStatus::Active),
                ..Default::default()
            },
        );

        assert_eq!(t.lease_end, new_end);
        // Renewal reactivates an expired tenancy
        assert_eq!(t.status, TenantStatus::Active);
    }
}
