use super::dates::{start_of_day, CalendarDay};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Effective state of a unit as shown on dashboards and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyStatus {
    Occupied,
    Vacant,
    Repairs,
}

impl OccupancyStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Occupied, Self::Vacant, Self::Repairs]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Occupied => "Occupied",
            Self::Vacant => "Vacant",
            Self::Repairs => "Repairs",
        }
    }

    /// Reads a manually entered status label. Unknown labels yield `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "occupied" => Some(Self::Occupied),
            "vacant" => Some(Self::Vacant),
            "repairs" => Some(Self::Repairs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseStatus {
    Active,
    Expired,
    Upcoming,
}

impl LeaseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// Inclusive contractual span of a tenancy.
///
/// Either bound may be missing when the record is incomplete; such a window
/// is never active. `start <= end` is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl LeaseWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns `None` when neither bound is known.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        if start.is_none() && end.is_none() {
            None
        } else {
            Some(Self { start, end })
        }
    }

    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }

    pub fn contains<D: CalendarDay>(&self, day: D) -> bool {
        let day = start_of_day(day);
        match self.bounds() {
            Some((start, end)) => start <= day && day <= end,
            None => false,
        }
    }
}

/// One rental unit's tenancy state at query time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitLeaseInfo {
    pub unit_id: String,
    #[serde(default)]
    pub current_tenant: Option<String>,
    #[serde(default)]
    pub current_lease: Option<LeaseWindow>,
    #[serde(default)]
    pub incoming_tenant: Option<String>,
    #[serde(default)]
    pub incoming_lease: Option<LeaseWindow>,
    #[serde(default)]
    pub maintenance_active: bool,
    /// Manually set label. Carried for display, never consulted by the resolver.
    #[serde(default)]
    pub declared_status: String,
    #[serde(default)]
    pub required_rent: Option<f64>,
}

impl UnitLeaseInfo {
    /// Rent owed for the unit, with a missing amount counted as zero.
    pub fn rent(&self) -> f64 {
        self.required_rent.unwrap_or(0.0)
    }

    pub fn declared(&self) -> Option<OccupancyStatus> {
        OccupancyStatus::from_label(&self.declared_status)
    }
}
