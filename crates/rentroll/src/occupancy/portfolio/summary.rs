use super::super::classifier::classify_window;
use super::super::dates::{start_of_day, CalendarDay};
use super::super::domain::{OccupancyStatus, UnitLeaseInfo};
use super::super::resolver::{active_occupant, resolve_status};
use super::super::revenue::{compute_unit_revenue, UnitRevenue};
use super::views::{RevenueTotals, StatusCountEntry, StatusDrift, UnitSnapshotView};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Dashboard roll-up of a set of units on one reference day.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub as_of: NaiveDate,
    pub total_units: usize,
    pub status_counts: Vec<StatusCountEntry>,
    pub occupancy_rate: f64,
    pub revenue: RevenueTotals,
    pub units_with_drift: usize,
    pub units: Vec<UnitSnapshotView>,
}

impl PortfolioSummary {
    pub fn build<D: CalendarDay>(
        units: &[UnitLeaseInfo],
        today: D,
        currency: impl Into<String>,
    ) -> Self {
        let today = start_of_day(today);
        let mut counts: HashMap<OccupancyStatus, usize> = HashMap::new();
        let mut totals = UnitRevenue::ZERO;
        let mut snapshots = Vec::with_capacity(units.len());

        for unit in units {
            let status = resolve_status(unit, today);
            let revenue = compute_unit_revenue(unit, today);
            *counts.entry(status).or_default() += 1;
            totals = totals + revenue;
            snapshots.push(snapshot(unit, status, revenue, today));
        }

        let occupied = counts
            .get(&OccupancyStatus::Occupied)
            .copied()
            .unwrap_or(0);
        let occupancy_rate = if units.is_empty() {
            0.0
        } else {
            occupied as f64 / units.len() as f64
        };

        let status_counts = OccupancyStatus::ordered()
            .into_iter()
            .map(|status| StatusCountEntry {
                status,
                status_label: status.label(),
                units: counts.get(&status).copied().unwrap_or(0),
            })
            .collect();

        let units_with_drift = snapshots
            .iter()
            .filter(|view| view.status_drift.is_some())
            .count();

        Self {
            as_of: today,
            total_units: units.len(),
            status_counts,
            occupancy_rate,
            revenue: RevenueTotals {
                currency: currency.into(),
                monthly_revenue: totals.monthly_revenue,
                expected_revenue: totals.expected_revenue,
                revenue_gap: totals.gap(),
            },
            units_with_drift,
            units: snapshots,
        }
    }

    pub fn count(&self, status: OccupancyStatus) -> usize {
        self.status_counts
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.units)
    }
}

fn snapshot(
    unit: &UnitLeaseInfo,
    status: OccupancyStatus,
    revenue: UnitRevenue,
    today: NaiveDate,
) -> UnitSnapshotView {
    let status_drift = unit
        .declared()
        .filter(|declared| *declared != status)
        .map(|declared| StatusDrift {
            declared,
            declared_label: declared.label(),
            resolved: status,
            resolved_label: status.label(),
        });

    UnitSnapshotView {
        unit_id: unit.unit_id.clone(),
        status,
        status_label: status.label(),
        occupant: active_occupant(unit, today).map(str::to_owned),
        current_lease_status: unit
            .current_lease
            .as_ref()
            .and_then(|lease| classify_window(lease, today)),
        current_lease_end: unit.current_lease.and_then(|lease| lease.end),
        incoming_lease_start: unit.incoming_lease.and_then(|lease| lease.start),
        monthly_revenue: revenue.monthly_revenue,
        expected_revenue: revenue.expected_revenue,
        status_drift,
    }
}
