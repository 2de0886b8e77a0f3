//! Dashboard aggregate computation.

use chrono::{DateTime, Duration, Utc};
use models_portfolio::{
    DashboardRates, DashboardStats, MaintenanceRequest, Payment, PaymentStatus, PaymentType,
    Property, PropertyStatus,
};

/// Days of paid-payment history that count toward monthly revenue.
const REVENUE_WINDOW_DAYS: i64 = 30;

/// Fold the property, maintenance, and payment lists into the dashboard
/// counters. `now` anchors the trailing revenue window so callers (and
/// tests) control the clock.
pub fn dashboard_stats(
    properties: &[Property],
    maintenance: &[MaintenanceRequest],
    payments: &[Payment],
    now: DateTime<Utc>,
) -> DashboardStats {
    let revenue_cutoff = now - Duration::days(REVENUE_WINDOW_DAYS);

    let mut stats = DashboardStats {
        total_properties: properties.len() as u64,
        maintenance_requests: maintenance.len() as u64,
        ..Default::default()
    };

    for property in properties {
        stats.total_units += u64::from(property.units);
        if property.status == PropertyStatus::Occupied {
            stats.occupied_properties += 1;
            stats.occupied_units += u64::from(property.units);
        }
    }

    for payment in payments {
        if payment.status == PaymentStatus::Completed {
            if let Some(paid) = payment.paid_date {
                if paid > revenue_cutoff && paid <= now {
                    stats.monthly_revenue += payment.amount;
                }
            }
        }
        if payment.payment_type == PaymentType::Rent && payment.status == PaymentStatus::Pending {
            stats.overdue_payments += 1;
        }
    }

    stats
}

/// Derive the display rates from the counters plus the full payment list.
/// Every division is zero-guarded to 0 rather than NaN.
pub fn dashboard_rates(stats: &DashboardStats, payments: &[Payment]) -> DashboardRates {
    let occupancy_rate = percentage(stats.occupied_units as f64, stats.total_units as f64);

    // Collection rate runs over all rent payments with no date window
    let mut rent_due = 0.0;
    let mut rent_collected = 0.0;
    for payment in payments {
        if payment.payment_type != PaymentType::Rent {
            continue;
        }
        rent_due += payment.amount;
        if payment.status == PaymentStatus::Completed {
            rent_collected += payment.amount;
        }
    }
    let collection_rate = percentage(rent_collected, rent_due);

    let avg_rent = if stats.occupied_properties == 0 {
        0.0
    } else {
        stats.monthly_revenue / stats.occupied_properties as f64
    };

    DashboardRates {
        occupancy_rate,
        collection_rate,
        avg_rent,
    }
}

fn percentage(numerator: f64, denominator: f64) -> u32 {
    if denominator == 0.0 {
        return 0;
    }
    (numerator / denominator * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use models_portfolio::{
        MaintenanceCategory, MaintenancePriority, MaintenanceStatus, PaymentMethod, PropertyType,
    };

    fn property(id: &str, units: u32, status: PropertyStatus) -> Property {
        Property {
            id: id.to_string(),
            name: format!("Property {id}"),
            address: "1 Main St".to_string(),
            property_type: PropertyType::Residential,
            units,
            rent_amount: 1000.0,
            status,
            image_urls: vec![],
            floor_plan_url: None,
            description: None,
            amenities: vec![],
            unit_records: vec![],
            created_at: Utc::now(),
            created_by: "u1".to_string(),
        }
    }

    fn payment(
        id: &str,
        amount: f64,
        payment_type: PaymentType,
        status: PaymentStatus,
        paid_date: Option<DateTime<Utc>>,
    ) -> Payment {
        Payment {
            id: id.to_string(),
            tenant_id: "t1".to_string(),
            property_id: "p1".to_string(),
            amount,
            payment_type,
            status,
            due_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            paid_date,
            description: "June rent".to_string(),
            method: Some(PaymentMethod::Transfer),
        }
    }

    fn request(id: &str, status: MaintenanceStatus) -> MaintenanceRequest {
        MaintenanceRequest {
            id: id.to_string(),
            property_id: "p1".to_string(),
            tenant_id: None,
            title: "Leaky tap".to_string(),
            description: "Kitchen tap drips".to_string(),
            priority: MaintenancePriority::Low,
            status,
            category: MaintenanceCategory::Plumbing,
            assigned_to: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            completed_at: None,
            estimated_cost: None,
            actual_cost: None,
        }
    }

    #[test]
    fn monthly_revenue_only_counts_recent_completed_payments() {
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let payments = vec![
            // In window, completed: counts
            payment(
                "pay1",
                1200.0,
                PaymentType::Rent,
                PaymentStatus::Completed,
                Some(now - Duration::days(5)),
            ),
            // Paid 31 days ago: excluded
            payment(
                "pay2",
                900.0,
                PaymentType::Rent,
                PaymentStatus::Completed,
                Some(now - Duration::days(31)),
            ),
            // In window but still pending: excluded
            payment(
                "pay3",
                800.0,
                PaymentType::Rent,
                PaymentStatus::Pending,
                Some(now - Duration::days(2)),
            ),
            // Completed but never marked paid: excluded
            payment("pay4", 700.0, PaymentType::Fee, PaymentStatus::Completed, None),
        ];

        let stats = dashboard_stats(&[], &[], &payments, now);
        assert_eq!(stats.monthly_revenue, 1200.0);
    }

    #[test]
    fn overdue_payments_counts_pending_rent_regardless_of_due_date() {
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let payments = vec![
            payment("pay1", 100.0, PaymentType::Rent, PaymentStatus::Pending, None),
            payment("pay2", 100.0, PaymentType::Rent, PaymentStatus::Completed, Some(now)),
            payment("pay3", 100.0, PaymentType::Utility, PaymentStatus::Pending, None),
            payment("pay4", 100.0, PaymentType::Rent, PaymentStatus::Failed, None),
        ];

        let stats = dashboard_stats(&[], &[], &payments, now);
        assert_eq!(stats.overdue_payments, 1);
    }

    #[test]
    fn unit_counters_split_by_occupancy() {
        let now = Utc::now();
        let properties = vec![
            property("p1", 8, PropertyStatus::Occupied),
            property("p2", 4, PropertyStatus::Vacant),
            property("p3", 2, PropertyStatus::Maintenance),
            property("p4", 6, PropertyStatus::Occupied),
        ];

        let stats = dashboard_stats(&properties, &[], &[], now);
        assert_eq!(stats.total_properties, 4);
        assert_eq!(stats.total_units, 20);
        assert_eq!(stats.occupied_properties, 2);
        assert_eq!(stats.occupied_units, 14);
    }

    #[test]
    fn maintenance_counter_ignores_status() {
        let now = Utc::now();
        let maintenance = vec![
            request("m1", MaintenanceStatus::Open),
            request("m2", MaintenanceStatus::Completed),
            request("m3", MaintenanceStatus::Cancelled),
        ];

        let stats = dashboard_stats(&[], &maintenance, &[], now);
        assert_eq!(stats.maintenance_requests, 3);
    }

    #[test]
    fn occupancy_rate_with_zero_properties_is_zero_not_nan() {
        let stats = dashboard_stats(&[], &[], &[], Utc::now());
        let rates = dashboard_rates(&stats, &[]);
        assert_eq!(rates.occupancy_rate, 0);
        assert_eq!(rates.collection_rate, 0);
        assert_eq!(rates.avg_rent, 0.0);
    }

    #[test]
    fn occupancy_rate_uses_unit_counts() {
        let now = Utc::now();
        let properties = vec![
            property("p1", 6, PropertyStatus::Occupied),
            property("p2", 4, PropertyStatus::Vacant),
        ];
        let stats = dashboard_stats(&properties, &[], &[], now);
        let rates = dashboard_rates(&stats, &[]);
        assert_eq!(rates.occupancy_rate, 60);
    }

    #[test]
    fn collection_rate_spans_all_rent_payments() {
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let payments = vec![
            // Old completed rent still counts toward collection
            payment(
                "pay1",
                500.0,
                PaymentType::Rent,
                PaymentStatus::Completed,
                Some(now - Duration::days(200)),
            ),
            payment("pay2", 500.0, PaymentType::Rent, PaymentStatus::Pending, None),
            // Non-rent payments stay out of the rate entirely
            payment("pay3", 999.0, PaymentType::Deposit, PaymentStatus::Completed, Some(now)),
        ];

        let stats = dashboard_stats(&[], &[], &payments, now);
        let rates = dashboard_rates(&stats, &payments);
        assert_eq!(rates.collection_rate, 50);
    }

    #[test]
    fn avg_rent_divides_revenue_by_occupied_properties() {
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let properties = vec![
            property("p1", 1, PropertyStatus::Occupied),
            property("p2", 1, PropertyStatus::Occupied),
        ];
        let payments = vec![payment(
            "pay1",
            3000.0,
            PaymentType::Rent,
            PaymentStatus::Completed,
            Some(now - Duration::days(1)),
        )];

        let stats = dashboard_stats(&properties, &[], &payments, now);
        let rates = dashboard_rates(&stats, &payments);
        assert_eq!(rates.avg_rent, 1500.0);
    }
}
