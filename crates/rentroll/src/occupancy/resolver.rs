use super::dates::{start_of_day, CalendarDay};
use super::domain::{LeaseWindow, OccupancyStatus, UnitLeaseInfo};

/// Whether `lease` covers `today`, bounds inclusive. A missing lease or a
/// lease with a missing bound is inactive.
pub fn is_lease_active_on<D: CalendarDay>(lease: Option<&LeaseWindow>, today: D) -> bool {
    lease.is_some_and(|window| window.contains(today))
}

/// Derives the effective status of a unit.
///
/// Maintenance overrides everything. An incoming lease that has already
/// started makes the unit occupied even when the current record was never
/// closed out, so it is checked before the current lease.
pub fn resolve_status<D: CalendarDay>(unit: &UnitLeaseInfo, today: D) -> OccupancyStatus {
    let today = start_of_day(today);

    if unit.maintenance_active {
        return OccupancyStatus::Repairs;
    }

    if is_lease_active_on(unit.incoming_lease.as_ref(), today)
        || is_lease_active_on(unit.current_lease.as_ref(), today)
    {
        return OccupancyStatus::Occupied;
    }

    OccupancyStatus::Vacant
}

pub fn has_active_tenant<D: CalendarDay>(unit: &UnitLeaseInfo, today: D) -> bool {
    resolve_status(unit, today) == OccupancyStatus::Occupied
}

/// Name of whoever holds the unit on `today`, preferring an incoming tenant
/// whose lease has started.
pub fn active_occupant<D: CalendarDay>(unit: &UnitLeaseInfo, today: D) -> Option<&str> {
    let today = start_of_day(today);

    if is_lease_active_on(unit.incoming_lease.as_ref(), today) {
        return unit.incoming_tenant.as_deref();
    }
    if is_lease_active_on(unit.current_lease.as_ref(), today) {
        return unit.current_tenant.as_deref();
    }
    None
}
