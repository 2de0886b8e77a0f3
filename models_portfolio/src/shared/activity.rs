//! Recent-activity feed events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which collection an activity event was projected from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Payment,
    Maintenance,
    Property,
}

/// Visual severity derived from the source record's status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivitySeverity {
    Success,
    Warning,
    Error,
    Neutral,
}

/// One row of the recent-activity feed. Purely a read-side projection over
/// the payment, maintenance, and property collections; there is no persisted
/// activity log.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ActivityEvent {
    /// Id of the source record.
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub severity: ActivitySeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}
