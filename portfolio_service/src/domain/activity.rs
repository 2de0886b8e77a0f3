//! Recent-activity feed projection.

use chrono::{DateTime, Duration, Utc};
use models_portfolio::{
    ActivityEvent, ActivityKind, ActivitySeverity, MaintenancePriority, MaintenanceRequest,
    MaintenanceStatus, Payment, PaymentStatus, Property,
};

/// How far back the feed looks.
const ACTIVITY_WINDOW_DAYS: i64 = 7;

/// Build the unified activity feed: payments paid or due in the window,
/// maintenance requests created in the window, and properties created in the
/// window, newest first.
pub fn recent_activity(
    properties: &[Property],
    maintenance: &[MaintenanceRequest],
    payments: &[Payment],
    now: DateTime<Utc>,
) -> Vec<ActivityEvent> {
    let cutoff = now - Duration::days(ACTIVITY_WINDOW_DAYS);
    let in_window = |ts: DateTime<Utc>| ts > cutoff && ts <= now;

    let mut events = Vec::new();

    for payment in payments {
        let timestamp = match payment.paid_date {
            Some(paid) if in_window(paid) => paid,
            _ if in_window(payment.due_date) => payment.due_date,
            _ => continue,
        };
        let (title, severity) = match payment.status {
            PaymentStatus::Completed => ("Payment received", ActivitySeverity::Success),
            PaymentStatus::Pending => ("Payment due", ActivitySeverity::Warning),
            PaymentStatus::Failed => ("Payment failed", ActivitySeverity::Error),
        };
        events.push(ActivityEvent {
            id: payment.id.clone(),
            kind: ActivityKind::Payment,
            title: title.to_string(),
            description: payment.description.clone(),
            timestamp,
            severity,
            amount: Some(payment.amount),
        });
    }

    for request in maintenance {
        if !in_window(request.created_at) {
            continue;
        }
        let severity = match (request.status, request.priority) {
            (MaintenanceStatus::Completed, _) => ActivitySeverity::Success,
            (MaintenanceStatus::Cancelled, _) => ActivitySeverity::Neutral,
            (_, MaintenancePriority::Urgent) => ActivitySeverity::Error,
            _ => ActivitySeverity::Warning,
        };
        events.push(ActivityEvent {
            id: request.id.clone(),
            kind: ActivityKind::Maintenance,
            title: "Maintenance request created".to_string(),
            description: request.title.clone(),
            timestamp: request.created_at,
            severity,
            amount: None,
        });
    }

    for property in properties {
        if !in_window(property.created_at) {
            continue;
        }
        events.push(ActivityEvent {
            id: property.id.clone(),
            kind: ActivityKind::Property,
            title: "Property added".to_string(),
            description: format!("{} - {}", property.name, property.address),
            timestamp: property.created_at,
            severity: ActivitySeverity::Neutral,
            amount: None,
        });
    }

    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use models_portfolio::{
        MaintenanceCategory, PaymentType, PropertyStatus, PropertyType,
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()
    }

    fn payment(id: &str, status: PaymentStatus, paid: Option<DateTime<Utc>>, due: DateTime<Utc>) -> Payment {
        Payment {
            id: id.to_string(),
            tenant_id: "t1".to_string(),
            property_id: "p1".to_string(),
            amount: 1000.0,
            payment_type: PaymentType::Rent,
            status,
            due_date: due,
            paid_date: paid,
            description: "July rent".to_string(),
            method: None,
        }
    }

    #[test]
    fn feed_is_sorted_newest_first_across_kinds() {
        let now = now();
        let payments = vec![payment(
            "pay1",
            PaymentStatus::Completed,
            Some(now - Duration::hours(2)),
            now - Duration::days(3),
        )];
        let maintenance = vec![MaintenanceRequest {
            id: "m1".to_string(),
            property_id: "p1".to_string(),
            tenant_id: None,
            title: "AC down".to_string(),
            description: "No cooling in unit 4".to_string(),
            priority: MaintenancePriority::Urgent,
            status: MaintenanceStatus::Open,
            category: MaintenanceCategory::Hvac,
            assigned_to: None,
            created_at: now - Duration::hours(1),
            updated_at: now - Duration::hours(1),
            completed_at: None,
            estimated_cost: None,
            actual_cost: None,
        }];
        let properties = vec![Property {
            id: "p9".to_string(),
            name: "Downtown Lofts".to_string(),
            address: "9 Center Ave".to_string(),
            property_type: PropertyType::Commercial,
            units: 12,
            rent_amount: 2500.0,
            status: PropertyStatus::Vacant,
            image_urls: vec![],
            floor_plan_url: None,
            description: None,
            amenities: vec![],
            unit_records: vec![],
            created_at: now - Duration::hours(3),
            created_by: "u1".to_string(),
        }];

        let events = recent_activity(&properties, &maintenance, &payments, now);

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "pay1", "p9"]);
        assert_eq!(events[0].severity, ActivitySeverity::Error);
        assert_eq!(events[1].amount, Some(1000.0));
    }

    #[test]
    fn stale_records_stay_out_of_the_feed() {
        let now = now();
        let payments = vec![
            // Paid 8 days ago, due 40 days ago: out
            payment(
                "pay_old",
                PaymentStatus::Completed,
                Some(now - Duration::days(8)),
                now - Duration::days(40),
            ),
            // Unpaid but due within the window: in
            payment(
                "pay_due",
                PaymentStatus::Pending,
                None,
                now - Duration::days(2),
            ),
        ];

        let events = recent_activity(&[], &[], &payments, now);
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["pay_due"]);
        assert_eq!(events[0].title, "Payment due");
        assert_eq!(events[0].severity, ActivitySeverity::Warning);
    }
}
