//! Store-backed integration tests.
//!
//! Skipped by default because you have to spin up a MongoDB deployment.
//! Run with: MONGODB_URI=mongodb://localhost:27017 cargo test -- --ignored
//!
//! Each test works in its own throwaway database and drops it on the way
//! out, so parallel runs do not trample each other.

use chrono::{TimeZone, Utc};
use models_portfolio::api::{CreateProperty, CreateTenant, UpdateTenant};
use models_portfolio::{EmergencyContact, PropertyStatus, PropertyType, TenantStatus};
use portfolio_db_client::visibility::VisibilityScope;

async fn test_database() -> mongodb::Database {
    let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set for integration tests");
    let client = mongodb::Client::with_uri_str(&uri)
        .await
        .expect("could not connect to mongodb");
    client.database(&format!("haven_test_{}", uuid::Uuid::new_v4().simple()))
}

fn tenant_input(property_id: &str, first_name: &str) -> CreateTenant {
    CreateTenant {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "0700000000".to_string(),
        property_id: property_id.to_string(),
        unit_number: None,
        lease_start: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        lease_end: Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap(),
        rent_amount: 900.0,
        deposit_amount: 900.0,
        status: TenantStatus::Active,
        emergency_contact: EmergencyContact {
            name: "Next Of Kin".to_string(),
            phone: "0711111111".to_string(),
            relationship: "sibling".to_string(),
        },
    }
}

#[tokio::test]
#[ignore]
async fn test_integration_create_then_list_property() -> anyhow::Result<()> {
    let db = test_database().await;
    let before = Utc::now();

    let created = portfolio_db_client::properties::create::create_property(
        &db,
        CreateProperty {
            name: "Test".to_string(),
            address: "1 Test Lane".to_string(),
            property_type: PropertyType::Residential,
            units: 5,
            rent_amount: 1000.0,
            status: PropertyStatus::Vacant,
            image_urls: vec![],
            floor_plan_url: None,
            description: None,
            amenities: vec![],
            unit_records: vec![],
        },
        "creator-user",
    )
    .await?;

    assert!(!created.id.is_empty());
    assert!(created.created_at >= before);

    let listed =
        portfolio_db_client::properties::list::list_properties(&db, &VisibilityScope::Full).await?;

    let matching: Vec<_> = listed
        .iter()
        .filter(|p| {
            p.name == "Test"
                && p.units == 5
                && p.rent_amount == 1000.0
                && p.status == PropertyStatus::Vacant
                && p.property_type == PropertyType::Residential
        })
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, created.id);
    assert_eq!(matching[0].created_by, "creator-user");

    db.drop().await?;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_integration_tenant_list_respects_visibility_scope() -> anyhow::Result<()> {
    let db = test_database().await;

    portfolio_db_client::tenants::create::create_tenant(&db, tenant_input("p1", "Assigned"))
        .await?;
    portfolio_db_client::tenants::create::create_tenant(&db, tenant_input("p2", "Hidden")).await?;

    let scope = VisibilityScope::Assigned(vec!["p1".to_string()]);
    let visible = portfolio_db_client::tenants::list::list_tenants(&db, &scope).await?;

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].property_id, "p1");
    assert_eq!(visible[0].first_name, "Assigned");

    let all = portfolio_db_client::tenants::list::list_tenants(&db, &VisibilityScope::Full).await?;
    assert_eq!(all.len(), 2);

    db.drop().await?;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_integration_lease_renewal_reactivates_expired_tenant() -> anyhow::Result<()> {
    let db = test_database().await;

    let mut input = tenant_input("p1", "Renewing");
    input.status = TenantStatus::Expired;
    let tenant = portfolio_db_client::tenants::create::create_tenant(&db, input).await?;

    let new_lease_end = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
    let renewed = portfolio_db_client::tenants::update::update_tenant(
        &db,
        &tenant.id,
        UpdateTenant {
            lease_end: Some(new_lease_end),
            status: Some(TenantStatus::Active),
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(renewed.lease_end, new_lease_end);
    assert_eq!(renewed.status, TenantStatus::Active);

    // And the change is durable, not just the returned value
    let fetched = portfolio_db_client::tenants::get::get_tenant(&db, &tenant.id).await?;
    assert_eq!(fetched.status, TenantStatus::Active);
    assert_eq!(fetched.lease_end, new_lease_end);

    db.drop().await?;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_integration_update_missing_document_is_not_found() -> anyhow::Result<()> {
    let db = test_database().await;

    let result = portfolio_db_client::tenants::update::update_tenant(
        &db,
        "no-such-tenant",
        UpdateTenant {
            status: Some(TenantStatus::Active),
            ..Default::default()
        },
    )
    .await;

    let err = result.err().expect("expected not-found error");
    assert!(err.is_not_found());

    db.drop().await?;
    Ok(())
}
