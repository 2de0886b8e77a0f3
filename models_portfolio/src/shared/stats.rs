//! Derived dashboard aggregates. Computed on demand, never persisted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw dashboard counters folded out of the property, maintenance, and
/// payment lists.
///
/// Both `occupied_properties` and `occupied_units` are carried: historical
/// revisions of the dashboard disagreed on which numerator the occupancy
/// rate uses, so the rate is computed from the unit-consistent pair while
/// both counts stay available to render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardStats {
    pub total_properties: u64,
    /// Sum of the unit counts of every property.
    pub total_units: u64,
    /// Number of properties with status `occupied`.
    pub occupied_properties: u64,
    /// Sum of the unit counts of occupied properties.
    pub occupied_units: u64,
    /// Completed payment volume over the trailing 30 days.
    pub monthly_revenue: f64,
    /// All maintenance requests, regardless of status.
    pub maintenance_requests: u64,
    /// Rent payments still pending, regardless of due date.
    pub overdue_payments: u64,
}

/// Display-level rates derived from [`DashboardStats`], rounded to whole
/// percents and zero-guarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardRates {
    /// occupied_units / total_units, as a percentage.
    pub occupancy_rate: u32,
    /// Rent collected / rent due over all rent payments, no date window.
    pub collection_rate: u32,
    /// monthly_revenue / occupied_properties.
    pub avg_rent: f64,
}
