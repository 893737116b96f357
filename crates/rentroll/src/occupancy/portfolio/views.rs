use super::super::domain::{LeaseStatus, OccupancyStatus};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatusCountEntry {
    pub status: OccupancyStatus,
    pub status_label: &'static str,
    pub units: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusDrift {
    pub declared: OccupancyStatus,
    pub declared_label: &'static str,
    pub resolved: OccupancyStatus,
    pub resolved_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitSnapshotView {
    pub unit_id: String,
    pub status: OccupancyStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_lease_status: Option<LeaseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_lease_end: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_lease_start: Option<NaiveDate>,
    pub monthly_revenue: f64,
    pub expected_revenue: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_drift: Option<StatusDrift>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevenueTotals {
    pub currency: String,
    pub monthly_revenue: f64,
    pub expected_revenue: f64,
    pub revenue_gap: f64,
}
