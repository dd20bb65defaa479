//! Date arithmetic for the plan: leap years, day offsets, and the mapping
//! from a calendar date to a position in a plan cycle.
//!
//! All functions work on `NaiveDate`s, so time of day never enters the
//! arithmetic; callers convert "now" to a local date through a `Clock`.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

use super::errors::*;

/// The source of "today" for the progress store.
///
/// `System` asks the operating system for the local date every time it is
/// queried; `Fixed` always returns the same date, which keeps tests
/// deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    /// Returns the current local date according to the clock.
    pub fn today(&self) -> NaiveDate {
        match *self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(d) => d,
        }
    }

    /// Moves a fixed clock forward by the given number of days.
    ///
    /// Has no effect on `Clock::System`.
    pub fn advance(&mut self, days: u64) {
        if let Clock::Fixed(ref mut d) = *self {
            if let Some(next) = d.checked_add_days(Days::new(days)) {
                *d = next;
            }
        }
    }
}

/// Returns whether `year` is a leap year in the Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of whole days from `from` to `to`, which is negative
/// if `to` comes first.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Returns the plan day that `date` falls on, for a plan that started on
/// `start` and repeats every `cycle_length` days.
///
/// Dates before the start wrap backwards, so the result is always in
/// `[0, cycle_length)`. A zero-length cycle always yields 0.
pub fn index_for_date_from_start_date(date: NaiveDate, start: NaiveDate, cycle_length: usize) -> usize {
    if cycle_length == 0 {
        return 0;
    }
    days_between(start, date).rem_euclid(cycle_length as i64) as usize
}

/// Returns the offset from `start` of the first February 29 within the
/// `window` days beginning at `start`, if there is one.
///
/// Only the February 29 of the start year and of the following year can
/// fall within a window of up to a year.
pub fn leap_day_offset(start: NaiveDate, window: usize) -> Option<usize> {
    [start.year(), start.year() + 1]
        .iter()
        .filter(|&&y| is_leap_year(y))
        .filter_map(|&y| NaiveDate::from_ymd_opt(y, 2, 29))
        .map(|feb29| days_between(start, feb29))
        .find(|&offset| offset >= 0 && (offset as usize) < window)
        .map(|offset| offset as usize)
}

/// Formats a date the way date arguments are written: `YYYY-MM-DD`.
pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a `YYYY-MM-DD` date argument.
pub fn parse_date_input(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| Error::from_kind(ErrorKind::InvalidDate(s.to_owned())))
}

/// Encodes a date as the ISO-8601 timestamp of its local midnight, in UTC.
pub fn date_to_timestamp(date: NaiveDate) -> String {
    let midnight = date.and_time(NaiveTime::MIN);
    let utc = match Local.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Midnight skipped by a DST change; fall back to the date itself
        None => Utc.from_utc_datetime(&midnight),
    };
    utc.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Decodes a stored start date: an RFC 3339 timestamp (read as a local
/// date) or a bare `YYYY-MM-DD`.
pub fn date_from_timestamp(s: &str) -> Result<NaiveDate> {
    match DateTime::parse_from_rfc3339(s.trim()) {
        Ok(dt) => Ok(dt.with_timezone(&Local).date_naive()),
        Err(_) => parse_date_input(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn index_same_and_next_day() {
        let start = date(2024, 1, 1);
        assert_eq!(index_for_date_from_start_date(start, start, 365), 0);
        assert_eq!(index_for_date_from_start_date(date(2024, 1, 2), start, 365), 1);
        assert_eq!(index_for_date_from_start_date(date(2024, 12, 30), start, 365), 364);
    }

    #[test]
    fn index_wraps_around() {
        let start = date(2024, 1, 1);
        assert_eq!(index_for_date_from_start_date(date(2024, 12, 31), start, 365), 0);
        assert_eq!(index_for_date_from_start_date(date(2024, 12, 31), start, 366), 365);
        assert_eq!(index_for_date_from_start_date(date(2025, 1, 1), start, 366), 0);
    }

    #[test]
    fn index_before_start_wraps_backwards() {
        let start = date(2023, 6, 15);
        assert_eq!(index_for_date_from_start_date(date(2023, 6, 14), start, 365), 364);
        assert_eq!(index_for_date_from_start_date(date(2022, 6, 15), start, 365), 0);
    }

    #[test]
    fn zero_cycle_is_zero() {
        let start = date(2023, 6, 15);
        assert_eq!(index_for_date_from_start_date(date(2023, 7, 1), start, 0), 0);
    }

    #[test]
    fn leap_day_in_start_year() {
        assert_eq!(leap_day_offset(date(2024, 1, 1), 365), Some(59));
        assert_eq!(leap_day_offset(date(2024, 2, 29), 365), Some(0));
        assert_eq!(leap_day_offset(date(2024, 3, 1), 365), None);
    }

    #[test]
    fn leap_day_in_next_year() {
        assert_eq!(leap_day_offset(date(2023, 3, 1), 365), None);
        assert_eq!(leap_day_offset(date(2023, 3, 2), 365), Some(364));
        assert_eq!(leap_day_offset(date(2023, 12, 31), 365), Some(60));
    }

    #[test]
    fn no_leap_day_in_ordinary_years() {
        assert_eq!(leap_day_offset(date(2023, 1, 1), 365), None);
        assert_eq!(leap_day_offset(date(2099, 6, 1), 365), None);
    }

    #[test]
    fn date_input_round_trip() {
        let d = parse_date_input("2024-02-29").unwrap();
        assert_eq!(d, date(2024, 2, 29));
        assert_eq!(format_date_input(d), "2024-02-29");
        assert!(parse_date_input("2023-02-29").is_err());
        assert!(parse_date_input("yesterday").is_err());
    }

    #[test]
    fn timestamps_keep_the_local_date() {
        let d = date(2024, 3, 10);
        assert_eq!(date_from_timestamp(&date_to_timestamp(d)).unwrap(), d);
        assert_eq!(date_from_timestamp("2024-03-10").unwrap(), d);
        assert!(date_from_timestamp("not a date").is_err());
    }

    #[test]
    fn fixed_clock_advances() {
        let mut clock = Clock::Fixed(date(2024, 2, 28));
        clock.advance(2);
        assert_eq!(clock.today(), date(2024, 3, 1));
    }
}
