// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Granularity tags.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::RangeInclusive;

use crate::epoch::{self, MAX_YEAR, MIN_YEAR};
use crate::weekday::WeekStart;

/// The unit of calendar time a [`PartialTime`](crate::PartialTime)
/// represents.
///
/// Weeks carry their start weekday: Monday weeks and Sunday weeks are
/// different granularities and their indices are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Day,
    Month,
    Quarter,
    Week(WeekStart),
}

impl Granularity {
    /// The type tag reported by `time_type()`.
    ///
    /// ```
    /// use timepanel::{Granularity, WeekStart};
    ///
    /// assert_eq!(Granularity::Quarter.time_type(), "quarter");
    /// assert_eq!(Granularity::Week(WeekStart::Monday).time_type(), "week");
    /// assert_eq!(
    ///     Granularity::Week(WeekStart::Sunday).time_type(),
    ///     "week_start_on_Sunday"
    /// );
    /// ```
    pub fn time_type(&self) -> String {
        match self {
            Granularity::Day => "day".to_owned(),
            Granularity::Month => "month".to_owned(),
            Granularity::Quarter => "quarter".to_owned(),
            Granularity::Week(WeekStart::Monday) => "week".to_owned(),
            Granularity::Week(start_on) => format!("week_start_on_{}", start_on.name()),
        }
    }

    /// Inclusive range of time indices whose periods lie within the
    /// supported years `0..=9999`.
    pub fn index_range(&self) -> RangeInclusive<i64> {
        match self {
            Granularity::Day => {
                epoch::day_index(first_supported_day())..=epoch::day_index(last_supported_day())
            }
            Granularity::Month => {
                epoch::month_index(MIN_YEAR, 1)..=epoch::month_index(MAX_YEAR, 12)
            }
            Granularity::Quarter => {
                epoch::quarter_index(MIN_YEAR, 1)..=epoch::quarter_index(MAX_YEAR, 4)
            }
            Granularity::Week(start_on) => {
                let first = first_supported_day();
                let last = last_supported_day();
                let last_start =
                    last - chrono::Days::new(u64::from(start_on.days_since(last.weekday())));
                // The week holding 0000-01-01 starts in year -1 unless it
                // starts exactly on that day.
                let lead = start_on.days_since(first.weekday());
                let first_start = first - chrono::Days::new(u64::from(lead));
                let skip = i64::from(lead != 0);
                (epoch::week_index(first_start) + skip)..=epoch::week_index(last_start)
            }
        }
    }
}

fn first_supported_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1).expect("year 0 is representable")
}

fn last_supported_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31).expect("year 9999 is representable")
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.time_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_type_tags() {
        assert_eq!(Granularity::Day.time_type(), "day");
        assert_eq!(Granularity::Month.time_type(), "month");
        assert_eq!(Granularity::Quarter.time_type(), "quarter");
        assert_eq!(Granularity::Week(WeekStart::Monday).time_type(), "week");
        assert_eq!(
            Granularity::Week(WeekStart::Wednesday).time_type(),
            "week_start_on_Wednesday"
        );
    }

    #[test]
    fn test_week_starts_are_distinct() {
        assert_ne!(
            Granularity::Week(WeekStart::Monday),
            Granularity::Week(WeekStart::Sunday)
        );
    }

    #[test]
    fn test_index_range_month_and_quarter() {
        assert_eq!(Granularity::Month.index_range(), -23_640..=96_359);
        assert_eq!(Granularity::Quarter.index_range(), -7_880..=32_119);
    }

    #[test]
    fn test_index_range_day() {
        let range = Granularity::Day.index_range();
        assert_eq!(*range.start(), -719_528);
        assert_eq!(*range.end(), 2_932_896);
    }

    #[test]
    fn test_index_range_week_first_start_in_year_zero() {
        for start_on in WeekStart::ALL {
            let range = Granularity::Week(start_on).index_range();
            let first = epoch::week_start_day_index(*range.start(), start_on.number());
            let date = epoch::date_from_day_index(first).unwrap();
            assert_eq!(date.year(), 0);
            assert!(date.ordinal() <= 7);
            let last = epoch::week_start_day_index(*range.end(), start_on.number());
            let date = epoch::date_from_day_index(last).unwrap();
            assert_eq!(date.year(), 9999);
            assert_eq!(date.month(), 12);
            assert!(date.day() >= 25);
        }
    }
}
