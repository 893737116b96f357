use super::dates::{same_calendar_month, start_of_day, CalendarDay};
use super::domain::UnitLeaseInfo;
use super::resolver::is_lease_active_on;
use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

/// Revenue contribution of a unit for the month containing the reference day.
///
/// `monthly_revenue` is what is being collected now; `expected_revenue` is
/// what the unit should yield by month end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct UnitRevenue {
    pub monthly_revenue: f64,
    pub expected_revenue: f64,
}

impl UnitRevenue {
    pub const ZERO: Self = Self {
        monthly_revenue: 0.0,
        expected_revenue: 0.0,
    };

    /// Expected minus collected.
    pub fn gap(&self) -> f64 {
        self.expected_revenue - self.monthly_revenue
    }
}

impl Add for UnitRevenue {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            monthly_revenue: self.monthly_revenue + other.monthly_revenue,
            expected_revenue: self.expected_revenue + other.expected_revenue,
        }
    }
}

impl Sum for UnitRevenue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// A signed incoming lease that begins later in the current month.
///
/// Strictly after `today`: a lease starting today is already active and must
/// not be counted a second time.
pub fn incoming_starts_this_month<D: CalendarDay>(unit: &UnitLeaseInfo, today: D) -> bool {
    let today = start_of_day(today);
    unit.incoming_lease
        .and_then(|lease| lease.start)
        .is_some_and(|start| same_calendar_month(start, today) && start > today)
}

/// Maintenance is deliberately ignored here; a unit under repair with a
/// paying tenant still counts toward revenue.
pub fn compute_unit_revenue<D: CalendarDay>(unit: &UnitLeaseInfo, today: D) -> UnitRevenue {
    let today = start_of_day(today);
    let rent = unit.rent();

    let current_active = is_lease_active_on(unit.current_lease.as_ref(), today);
    let incoming_active = is_lease_active_on(unit.incoming_lease.as_ref(), today);

    if current_active || incoming_active {
        UnitRevenue {
            monthly_revenue: rent,
            expected_revenue: rent,
        }
    } else if incoming_starts_this_month(unit, today) {
        UnitRevenue {
            monthly_revenue: 0.0,
            expected_revenue: rent,
        }
    } else {
        UnitRevenue::ZERO
    }
}

/// Sums unit contributions without rounding.
pub fn portfolio_revenue<'a, I, D>(units: I, today: D) -> UnitRevenue
where
    I: IntoIterator<Item = &'a UnitLeaseInfo>,
    D: CalendarDay,
{
    let today = start_of_day(today);
    units
        .into_iter()
        .map(|unit| compute_unit_revenue(unit, today))
        .sum()
}
