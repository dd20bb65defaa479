//! This module provides the `Plan` type, a fixed table of daily passage
//! lists, and the leap-adjusted `Selection` sequence built from it for a
//! particular start date.

use std::io::Read;
use std::slice;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::leap_day_offset;
use super::errors::*;
use super::plan_data::PLAN_DATA;

/// The passages to read on one day of the plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct PlanDay {
    passages: Vec<String>,
}

impl PlanDay {
    /// Returns a day with the given passages, in reading order.
    pub fn new<I, S>(passages: I) -> PlanDay
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PlanDay { passages: passages.into_iter().map(Into::into).collect() }
    }

    /// Returns the passages of the day.
    pub fn passages(&self) -> &[String] {
        &self.passages
    }
}

/// A reading plan: an ordered list of days, one per day of the year.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Plan {
    days: Vec<PlanDay>,
}

impl Plan {
    /// Constructs a plan from a list of days, failing if there are none.
    pub fn from_days(days: Vec<PlanDay>) -> Result<Plan> {
        if days.is_empty() {
            Err(ErrorKind::PlanFormat("cannot construct an empty plan".into()).into())
        } else {
            Ok(Plan { days: days })
        }
    }

    /// Returns the plan compiled into the crate.
    pub fn bundled() -> Plan {
        Plan { days: PLAN_DATA.iter().map(|day| PlanDay::new(day.iter().copied())).collect() }
    }

    /// Reads a plan from JSON: an array of days, each an array of passages.
    pub fn from_json<T: Read>(input: T) -> Result<Plan> {
        let days: Vec<PlanDay> = serde_json::from_reader(input)
            .chain_err(|| ErrorKind::Json("could not parse plan".into()))?;
        Plan::from_days(days)
    }

    /// Returns the number of days in the plan.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns the day at `index`, if the plan has one.
    pub fn day(&self, index: usize) -> Option<&PlanDay> {
        self.days.get(index)
    }

    /// Returns an iterator over the days of the plan.
    pub fn days(&self) -> slice::Iter<PlanDay> {
        self.days.iter()
    }
}

/// One entry of the leap-adjusted schedule: either a regular plan day or
/// the inserted February 29, which has nothing to read.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    passages: Vec<String>,
    is_leap: bool,
}

impl Selection {
    fn regular(day: &PlanDay) -> Selection {
        Selection {
            passages: day.passages.clone(),
            is_leap: false,
        }
    }

    fn leap() -> Selection {
        Selection {
            passages: Vec::new(),
            is_leap: true,
        }
    }

    /// Returns the passages to read, which is empty for a leap day.
    pub fn passages(&self) -> &[String] {
        &self.passages
    }

    /// Returns whether this is the inserted leap day.
    pub fn is_leap(&self) -> bool {
        self.is_leap
    }
}

/// Lays the plan out over one cycle beginning at `start`.
///
/// If February 29 falls within `plan.len()` days of `start`, a leap entry is
/// inserted at its offset and the cycle grows by one. The insertion does not
/// use up a plan day: plan day `k` is always the `k`th non-leap entry.
pub fn build_selections_with_leap(plan: &Plan, start: NaiveDate) -> Vec<Selection> {
    let leap = leap_day_offset(start, plan.len());
    let mut selections = Vec::with_capacity(plan.len() + 1);
    for (k, day) in plan.days().enumerate() {
        if leap == Some(k) {
            selections.push(Selection::leap());
        }
        selections.push(Selection::regular(day));
    }
    debug!("built {} selections from {} (leap offset {:?})",
           selections.len(),
           start,
           leap);
    selections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_data::PLAN_DAYS;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leap_count(selections: &[Selection]) -> usize {
        selections.iter().filter(|s| s.is_leap()).count()
    }

    #[test]
    fn bundled_plan_has_a_year_of_days() {
        let plan = Plan::bundled();
        assert_eq!(plan.len(), PLAN_DAYS);
        assert_eq!(plan.len(), 365);
        assert!(plan.days().all(|d| !d.passages().is_empty()));
        assert_eq!(plan.day(0).unwrap().passages()[0], "Genesis 1");
    }

    #[test]
    fn no_leap_day_for_ordinary_years() {
        let selections = build_selections_with_leap(&Plan::bundled(), date(2023, 1, 1));
        assert_eq!(selections.len(), 365);
        assert_eq!(leap_count(&selections), 0);
    }

    #[test]
    fn leap_day_for_leap_years() {
        let plan = Plan::bundled();
        let selections = build_selections_with_leap(&plan, date(2024, 1, 1));
        assert_eq!(selections.len(), 366);
        assert_eq!(leap_count(&selections), 1);
        assert!(selections[59].is_leap());
        assert!(selections[59].passages().is_empty());
    }

    #[test]
    fn leap_day_does_not_consume_a_plan_day() {
        let plan = Plan::bundled();
        let selections = build_selections_with_leap(&plan, date(2024, 1, 1));
        assert_eq!(selections[58].passages(), plan.day(58).unwrap().passages());
        assert_eq!(selections[60].passages(), plan.day(59).unwrap().passages());
        assert_eq!(selections[365].passages(), plan.day(364).unwrap().passages());
    }

    #[test]
    fn leap_day_from_the_following_year() {
        let plan = Plan::bundled();
        let selections = build_selections_with_leap(&plan, date(2023, 12, 31));
        assert_eq!(selections.len(), 366);
        assert!(selections[60].is_leap());

        // Feb 29, 2024 is exactly 365 days after this start, outside the cycle
        let selections = build_selections_with_leap(&plan, date(2023, 3, 1));
        assert_eq!(selections.len(), 365);
        assert_eq!(leap_count(&selections), 0);
    }

    #[test]
    fn lengths_over_a_span_of_start_dates() {
        let plan = Plan::bundled();
        let mut start = date(2022, 11, 1);
        while start < date(2025, 4, 1) {
            let selections = build_selections_with_leap(&plan, start);
            let has_feb29 = start.iter_days().take(365).any(|d| d.month() == 2 && d.day() == 29);
            let expected = if has_feb29 { 366 } else { 365 };
            assert_eq!(selections.len(), expected, "start {}", start);
            assert_eq!(leap_count(&selections), expected - 365, "start {}", start);
            start = start.succ_opt().unwrap();
        }
    }

    #[test]
    fn plan_from_json() {
        let plan = Plan::from_json(&br#"[["Genesis 1", "Matthew 1"], ["Jude"]]"#[..]).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.day(1).unwrap().passages(), &["Jude".to_owned()]);
        assert!(Plan::from_json(&b"[]"[..]).is_err());
        assert!(Plan::from_json(&b"{"[..]).is_err());
    }

    #[test]
    fn short_plans_only_see_leap_days_in_their_window() {
        let plan = Plan::from_days((0..10).map(|i| PlanDay::new(vec![format!("Psalms {}", i + 1)])).collect())
            .unwrap();
        assert_eq!(build_selections_with_leap(&plan, date(2024, 2, 25)).len(), 11);
        assert_eq!(build_selections_with_leap(&plan, date(2024, 1, 1)).len(), 10);
    }
}
