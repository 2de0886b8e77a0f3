//! Search over properties and tenants.

use models_portfolio::{Property, Tenant};

/// Case-insensitive substring search. Properties match on name or address,
/// tenants on first/last/full name or email. A blank query matches nothing.
pub fn search_records(
    query: &str,
    properties: Vec<Property>,
    tenants: Vec<Tenant>,
) -> (Vec<Property>, Vec<Tenant>) {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let properties = properties
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.address.to_lowercase().contains(&needle)
        })
        .collect();

    let tenants = tenants
        .into_iter()
        .filter(|t| {
            t.name().to_lowercase().contains(&needle) || t.email.to_lowercase().contains(&needle)
        })
        .collect();

    (properties, tenants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use models_portfolio::{EmergencyContact, PropertyStatus, PropertyType, TenantStatus};

    fn property(id: &str, name: &str, address: &str) -> Property {
        Property {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            property_type: PropertyType::Residential,
            units: 1,
            rent_amount: 1000.0,
            status: PropertyStatus::Vacant,
            image_urls: vec![],
            floor_plan_url: None,
            description: None,
            amenities: vec![],
            unit_records: vec![],
            created_at: Utc::now(),
            created_by: "u1".to_string(),
        }
    }

    fn tenant(id: &str, first: &str, last: &str, email: &str) -> Tenant {
        Tenant {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: "0700000000".to_string(),
            property_id: "p1".to_string(),
            unit_number: None,
            lease_start: Utc::now(),
            lease_end: Utc::now(),
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

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let properties = vec![
            property("p1", "Sunset Apartments", "12 Hill Rd"),
            property("p2", "Office Plaza", "90 Market St"),
        ];
        let tenants = vec![
            tenant("t1", "John", "Smith", "john@example.com"),
            tenant("t2", "Emily", "Johnson", "emily@example.com"),
        ];

        let (props, tens) = search_records("sunset", properties.clone(), tenants.clone());
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].id, "p1");
        assert!(tens.is_empty());

        // "john" hits John Smith's first name and Emily Johnson's last name
        let (props, tens) = search_records("JOHN", properties, tenants);
        assert!(props.is_empty());
        assert_eq!(tens.len(), 2);
    }

    #[test]
    fn full_name_and_address_are_searchable() {
        let tenants = vec![tenant("t1", "John", "Smith", "js@example.com")];
        let (_, tens) = search_records("john smith", vec![], tenants);
        assert_eq!(tens.len(), 1);

        let properties = vec![property("p1", "Lofts", "14 Riverside Drive")];
        let (props, _) = search_records("riverside", properties, vec![]);
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let properties = vec![property("p1", "Sunset", "1 Road")];
        let (props, tens) = search_records("   ", properties, vec![]);
        assert!(props.is_empty());
        assert!(tens.is_empty());
    }
}
