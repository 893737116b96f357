use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// A point in time that can be collapsed to the calendar day it falls on.
///
/// Every lease comparison goes through this trait so that two timestamps on
/// the same day always compare equal, whatever their clock time.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Drops the time-of-day component of `value`.
pub fn start_of_day<D: CalendarDay>(value: D) -> NaiveDate {
    value.calendar_day()
}

pub fn same_calendar_month(left: NaiveDate, right: NaiveDate) -> bool {
    left.year() == right.year() && left.month() == right.month()
}

/// Parses a persisted lease date. Unparsable input yields `None` so callers
/// treat it exactly like a missing bound.
pub fn parse_lease_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(start_of_day(dt));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(start_of_day)
}
