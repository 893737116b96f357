use super::normalizer::{clean_text, parse_flag, parse_rent};
use crate::occupancy::dates::parse_lease_date;
use crate::occupancy::{LeaseWindow, UnitLeaseInfo};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A unit row as the data layer stores it: nullable strings, one column per
/// lease bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub unit_id: String,
    #[serde(default)]
    pub required_rent: Option<f64>,
    #[serde(default)]
    pub current_tenant: Option<String>,
    #[serde(default)]
    pub current_lease_start: Option<String>,
    #[serde(default)]
    pub current_lease_end: Option<String>,
    #[serde(default)]
    pub incoming_tenant: Option<String>,
    #[serde(default)]
    pub incoming_lease_start: Option<String>,
    #[serde(default)]
    pub incoming_lease_end: Option<String>,
    #[serde(default)]
    pub maintenance_active: bool,
    #[serde(default)]
    pub declared_status: String,
}

impl UnitRecord {
    /// Converts persisted strings into engine input. Unparsable dates are
    /// logged and dropped so the affected lease reads as incomplete.
    pub fn into_lease_info(self) -> UnitLeaseInfo {
        let current_lease = lease_window(
            &self.unit_id,
            "current",
            self.current_lease_start.as_deref(),
            self.current_lease_end.as_deref(),
        );
        let incoming_lease = lease_window(
            &self.unit_id,
            "incoming",
            self.incoming_lease_start.as_deref(),
            self.incoming_lease_end.as_deref(),
        );

        UnitLeaseInfo {
            current_tenant: self.current_tenant.as_deref().and_then(clean_text),
            current_lease,
            incoming_tenant: self.incoming_tenant.as_deref().and_then(clean_text),
            incoming_lease,
            maintenance_active: self.maintenance_active,
            declared_status: self.declared_status.trim().to_string(),
            required_rent: self.required_rent.filter(|rent| rent.is_finite() && *rent >= 0.0),
            unit_id: self.unit_id,
        }
    }
}

impl From<UnitRecord> for UnitLeaseInfo {
    fn from(record: UnitRecord) -> Self {
        record.into_lease_info()
    }
}

fn lease_window(
    unit_id: &str,
    lease: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Option<LeaseWindow> {
    let start = start.and_then(|raw| parse_bound(unit_id, lease, "start", raw));
    let end = end.and_then(|raw| parse_bound(unit_id, lease, "end", raw));
    LeaseWindow::from_bounds(start, end)
}

fn parse_bound(
    unit_id: &str,
    lease: &str,
    bound: &str,
    raw: &str,
) -> Option<chrono::NaiveDate> {
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_lease_date(raw);
    if parsed.is_none() {
        warn!(unit_id, lease, bound, value = raw, "ignoring unparsable lease date");
    }
    parsed
}

/// Raw CSV row. Column names follow the rent-roll export headers.
#[derive(Debug, Deserialize)]
pub(crate) struct RentRollRow {
    #[serde(rename = "Unit")]
    unit: String,
    #[serde(rename = "Required Rent", default)]
    required_rent: Option<String>,
    #[serde(rename = "Current Tenant", default)]
    current_tenant: Option<String>,
    #[serde(rename = "Current Lease Start", default)]
    current_lease_start: Option<String>,
    #[serde(rename = "Current Lease End", default)]
    current_lease_end: Option<String>,
    #[serde(rename = "Incoming Tenant", default)]
    incoming_tenant: Option<String>,
    #[serde(rename = "Incoming Lease Start", default)]
    incoming_lease_start: Option<String>,
    #[serde(rename = "Incoming Lease End", default)]
    incoming_lease_end: Option<String>,
    #[serde(rename = "Maintenance Active", default)]
    maintenance_active: Option<String>,
    #[serde(rename = "Declared Status", default)]
    declared_status: Option<String>,
}

impl RentRollRow {
    pub(crate) fn into_record(self) -> UnitRecord {
        let unit_id = clean_text(&self.unit).unwrap_or_default();
        let required_rent = self.required_rent.as_deref().and_then(|raw| {
            let rent = parse_rent(raw);
            if rent.is_none() && !raw.trim().is_empty() {
                warn!(unit_id = %unit_id, value = raw, "ignoring unparsable rent");
            }
            rent
        });

        UnitRecord {
            required_rent,
            current_tenant: non_empty(self.current_tenant),
            current_lease_start: non_empty(self.current_lease_start),
            current_lease_end: non_empty(self.current_lease_end),
            incoming_tenant: non_empty(self.incoming_tenant),
            incoming_lease_start: non_empty(self.incoming_lease_start),
            incoming_lease_end: non_empty(self.incoming_lease_end),
            maintenance_active: self.maintenance_active.as_deref().is_some_and(parse_flag),
            declared_status: self.declared_status.unwrap_or_default(),
            unit_id,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}
