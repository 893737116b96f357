use super::dates::{start_of_day, CalendarDay};
use super::domain::{LeaseStatus, LeaseWindow};

/// Places a lease interval relative to `today`.
///
/// The expiry check runs first, so an inverted window (`end < start`) is
/// expired once `today` passes `end` and upcoming otherwise. Callers must
/// supply `start <= end` for a meaningful answer.
pub fn classify_lease<S, E, T>(start: S, end: E, today: T) -> LeaseStatus
where
    S: CalendarDay,
    E: CalendarDay,
    T: CalendarDay,
{
    let start = start_of_day(start);
    let end = start_of_day(end);
    let today = start_of_day(today);

    if today > end {
        LeaseStatus::Expired
    } else if today < start {
        LeaseStatus::Upcoming
    } else {
        LeaseStatus::Active
    }
}

/// Classifies a stored window, or `None` when a bound is missing.
pub fn classify_window<T: CalendarDay>(window: &LeaseWindow, today: T) -> Option<LeaseStatus> {
    window
        .bounds()
        .map(|(start, end)| classify_lease(start, end, today))
}
