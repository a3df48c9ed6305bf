// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Partial-time values: calendar periods of a fixed granularity.
//!
//! This module provides:
//! - [`Day`], [`Month`], [`Quarter`], [`Week`]: one type per granularity
//! - [`PartialTime`]: the sum type over the four, with one dispatch per
//!   operation
//!
//! Every value exposes the same four accessors:
//!
//! | Accessor | Day | Month | Quarter | Week |
//! |----------|-----|-------|---------|------|
//! | `smv_time()` | `D20120531` | `M201205` | `Q201201` | `W20120227`, `W(7)20120304` |
//! | `time_index()` | `15491` | `508` | `168` | `2200` |
//! | `time_label()` | `2012-05-31` | `2012-05` | `2012-Q1` | `Week of 2012-02-27` |
//! | `time_type()` | `day` | `month` | `quarter` | `week`, `week_start_on_Sunday` |

use chrono::{Datelike, NaiveDate};
use qtty::Days;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::epoch::{self, check_year};
use crate::error::PanelError;
use crate::granularity::Granularity;
use crate::weekday::WeekStart;

fn checked_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, PanelError> {
    check_year(year)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        PanelError::invalid_date(format!(
            "{year:04}-{month:02}-{day:02} is not a calendar date"
        ))
    })
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of a validated month exists")
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(chrono::Days::new(days))
        .expect("supported years stay inside chrono's range")
}

// ═══════════════════════════════════════════════════════════════════════════
// Day
// ═══════════════════════════════════════════════════════════════════════════

/// A single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day {
    date: NaiveDate,
}

impl Day {
    /// Creates a day from a Gregorian date.
    ///
    /// # Errors
    ///
    /// [`PanelError::InvalidDate`] if the triple is not a calendar date.
    ///
    /// ```
    /// use timepanel::Day;
    ///
    /// let d = Day::new(2012, 5, 31).unwrap();
    /// assert_eq!(d.smv_time(), "D20120531");
    /// assert_eq!(d.time_index(), 15491);
    /// assert!(Day::new(2012, 2, 30).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, PanelError> {
        Ok(Self {
            date: checked_date(year, month, day)?,
        })
    }

    /// Creates a day from a `chrono` date.
    pub fn from_date(date: NaiveDate) -> Result<Self, PanelError> {
        check_year(date.year())?;
        Ok(Self { date })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn smv_time(&self) -> String {
        format!("D{:04}{:02}{:02}", self.year(), self.month(), self.day())
    }

    /// Days since 1970-01-01.
    pub fn time_index(&self) -> i64 {
        epoch::day_index(self.date)
    }

    pub fn time_label(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    pub fn time_type(&self) -> String {
        Granularity::Day.time_type()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Month
// ═══════════════════════════════════════════════════════════════════════════

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month.
    ///
    /// # Errors
    ///
    /// [`PanelError::InvalidDate`] if `month` is not in `1..=12`.
    ///
    /// ```
    /// use timepanel::Month;
    ///
    /// let m = Month::new(2012, 5).unwrap();
    /// assert_eq!(m.smv_time(), "M201205");
    /// assert_eq!(m.time_index(), 508);
    /// assert_eq!(m.time_label(), "2012-05");
    /// ```
    pub fn new(year: i32, month: u32) -> Result<Self, PanelError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(PanelError::invalid_date(format!(
                "month {month} is outside 1..=12"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn smv_time(&self) -> String {
        format!("M{:04}{:02}", self.year, self.month)
    }

    /// Months since 1970-01.
    pub fn time_index(&self) -> i64 {
        epoch::month_index(self.year, self.month)
    }

    pub fn time_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn time_type(&self) -> String {
        Granularity::Month.time_type()
    }

    fn start_date(&self) -> NaiveDate {
        first_of_month(self.year, self.month)
    }

    fn end_date(&self) -> NaiveDate {
        match self.month {
            12 => first_of_month(self.year + 1, 1),
            m => first_of_month(self.year, m + 1),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Quarter
// ═══════════════════════════════════════════════════════════════════════════

/// A calendar quarter (Q1 = January to March).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    year: i32,
    quarter: u32,
}

impl Quarter {
    /// Creates a quarter.
    ///
    /// # Errors
    ///
    /// [`PanelError::InvalidDate`] if `quarter` is not in `1..=4`.
    ///
    /// ```
    /// use timepanel::Quarter;
    ///
    /// let q = Quarter::new(2012, 1).unwrap();
    /// assert_eq!(q.smv_time(), "Q201201");
    /// assert_eq!(q.time_index(), 168);
    /// assert_eq!(q.time_label(), "2012-Q1");
    /// ```
    pub fn new(year: i32, quarter: u32) -> Result<Self, PanelError> {
        check_year(year)?;
        if !(1..=4).contains(&quarter) {
            return Err(PanelError::invalid_date(format!(
                "quarter {quarter} is outside 1..=4"
            )));
        }
        Ok(Self { year, quarter })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn quarter(&self) -> u32 {
        self.quarter
    }

    /// First month of the quarter (1, 4, 7 or 10).
    pub fn first_month(&self) -> u32 {
        (self.quarter - 1) * 3 + 1
    }

    pub fn smv_time(&self) -> String {
        format!("Q{:04}{:02}", self.year, self.quarter)
    }

    /// Quarters since 1970-Q1.
    pub fn time_index(&self) -> i64 {
        epoch::quarter_index(self.year, self.quarter)
    }

    pub fn time_label(&self) -> String {
        format!("{:04}-Q{}", self.year, self.quarter)
    }

    pub fn time_type(&self) -> String {
        Granularity::Quarter.time_type()
    }

    fn start_date(&self) -> NaiveDate {
        first_of_month(self.year, self.first_month())
    }

    fn end_date(&self) -> NaiveDate {
        match self.quarter {
            4 => first_of_month(self.year + 1, 1),
            _ => first_of_month(self.year, self.first_month() + 3),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Week
// ═══════════════════════════════════════════════════════════════════════════

/// A seven-day week aligned to a configurable start weekday.
///
/// The anchor date given at construction is normalised back to the most
/// recent `start_on` at or before it; only the normalised start is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week {
    start: NaiveDate,
    start_on: WeekStart,
}

impl Week {
    /// Creates the Monday week holding the given date.
    ///
    /// ```
    /// use timepanel::Week;
    ///
    /// let w = Week::new(2012, 3, 4).unwrap();
    /// assert_eq!(w.smv_time(), "W20120227");
    /// assert_eq!(w.time_index(), 2200);
    /// assert_eq!(w.time_label(), "Week of 2012-02-27");
    /// assert_eq!(w.time_type(), "week");
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, PanelError> {
        Self::with_week_start(year, month, day, WeekStart::Monday)
    }

    /// Creates the week starting on `start_on` (a weekday name) that holds
    /// the given date.
    ///
    /// # Errors
    ///
    /// [`PanelError::InvalidDate`] for an invalid date, checked first;
    /// [`PanelError::InvalidWeekday`] for an unrecognised `start_on`.
    ///
    /// ```
    /// use timepanel::Week;
    ///
    /// let w = Week::with_start_on(2012, 3, 4, "Sunday").unwrap();
    /// assert_eq!(w.smv_time(), "W(7)20120304");
    /// assert_eq!(w.time_index(), 2201);
    /// assert_eq!(w.time_type(), "week_start_on_Sunday");
    /// ```
    pub fn with_start_on(
        year: i32,
        month: u32,
        day: u32,
        start_on: &str,
    ) -> Result<Self, PanelError> {
        let anchor = checked_date(year, month, day)?;
        Self::containing(anchor, start_on.parse::<WeekStart>()?)
    }

    /// Like [`Week::with_start_on`] with an already-parsed week start.
    pub fn with_week_start(
        year: i32,
        month: u32,
        day: u32,
        start_on: WeekStart,
    ) -> Result<Self, PanelError> {
        Self::containing(checked_date(year, month, day)?, start_on)
    }

    /// The week starting on `start_on` that holds `date`.
    ///
    /// # Errors
    ///
    /// [`PanelError::InvalidDate`] if the normalised start falls outside the
    /// supported years (e.g. early January of year 0).
    pub fn containing(date: NaiveDate, start_on: WeekStart) -> Result<Self, PanelError> {
        check_year(date.year())?;
        let back = start_on.days_since(date.weekday());
        let start = date
            .checked_sub_days(chrono::Days::new(u64::from(back)))
            .ok_or_else(|| PanelError::invalid_date(format!("{date} has no week start")))?;
        check_year(start.year())?;
        Ok(Self { start, start_on })
    }

    /// First day of the week.
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    pub fn start_on(&self) -> WeekStart {
        self.start_on
    }

    pub fn smv_time(&self) -> String {
        let (y, m, d) = (self.start.year(), self.start.month(), self.start.day());
        match self.start_on {
            WeekStart::Monday => format!("W{y:04}{m:02}{d:02}"),
            other => format!("W({}){y:04}{m:02}{d:02}", other.number()),
        }
    }

    pub fn time_index(&self) -> i64 {
        epoch::week_index(self.start)
    }

    pub fn time_label(&self) -> String {
        format!(
            "Week of {:04}-{:02}-{:02}",
            self.start.year(),
            self.start.month(),
            self.start.day()
        )
    }

    pub fn time_type(&self) -> String {
        Granularity::Week(self.start_on).time_type()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PartialTime
// ═══════════════════════════════════════════════════════════════════════════

/// A calendar period of one of the four granularities.
///
/// Values are immutable and `Copy`. Two values compare (`PartialOrd`) only
/// when they share a [`Granularity`]; they are then ordered by time index.
///
/// # Examples
///
/// ```
/// use timepanel::{Day, Month, PartialTime};
///
/// let m: PartialTime = Month::new(2012, 5)?.into();
/// let d: PartialTime = Day::new(2012, 5, 31)?.into();
///
/// assert_eq!(m.smv_time(), "M201205");
/// assert_eq!(m.succ()?.smv_time(), "M201206");
/// assert_eq!(d.time_label(), "2012-05-31");
/// assert!(m.partial_cmp(&d).is_none());
/// # Ok::<(), timepanel::PanelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartialTime {
    Day(Day),
    Month(Month),
    Quarter(Quarter),
    Week(Week),
}

impl PartialTime {
    /// Canonical sortable key, suitable as a string column value.
    pub fn smv_time(&self) -> String {
        match self {
            PartialTime::Day(d) => d.smv_time(),
            PartialTime::Month(m) => m.smv_time(),
            PartialTime::Quarter(q) => q.smv_time(),
            PartialTime::Week(w) => w.smv_time(),
        }
    }

    /// Dense index within the value's granularity; consecutive periods differ
    /// by exactly one.
    pub fn time_index(&self) -> i64 {
        match self {
            PartialTime::Day(d) => d.time_index(),
            PartialTime::Month(m) => m.time_index(),
            PartialTime::Quarter(q) => q.time_index(),
            PartialTime::Week(w) => w.time_index(),
        }
    }

    /// Human-readable label.
    pub fn time_label(&self) -> String {
        match self {
            PartialTime::Day(d) => d.time_label(),
            PartialTime::Month(m) => m.time_label(),
            PartialTime::Quarter(q) => q.time_label(),
            PartialTime::Week(w) => w.time_label(),
        }
    }

    /// Granularity tag (`"day"`, `"month"`, `"quarter"`, `"week"`, ...).
    pub fn time_type(&self) -> String {
        self.granularity().time_type()
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            PartialTime::Day(_) => Granularity::Day,
            PartialTime::Month(_) => Granularity::Month,
            PartialTime::Quarter(_) => Granularity::Quarter,
            PartialTime::Week(w) => Granularity::Week(w.start_on),
        }
    }

    /// The period of `granularity` that holds `date`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use timepanel::{Granularity, PartialTime};
    ///
    /// let date = NaiveDate::from_ymd_opt(2012, 5, 31).unwrap();
    /// let q = PartialTime::containing(date, Granularity::Quarter).unwrap();
    /// assert_eq!(q.smv_time(), "Q201202");
    /// ```
    pub fn containing(date: NaiveDate, granularity: Granularity) -> Result<Self, PanelError> {
        Ok(match granularity {
            Granularity::Day => Day::from_date(date)?.into(),
            Granularity::Month => Month::new(date.year(), date.month())?.into(),
            Granularity::Quarter => Quarter::new(date.year(), (date.month() - 1) / 3 + 1)?.into(),
            Granularity::Week(start_on) => Week::containing(date, start_on)?.into(),
        })
    }

    /// Inverse of [`PartialTime::time_index`].
    ///
    /// # Errors
    ///
    /// [`PanelError::IndexOutOfRange`] if the index is outside
    /// [`Granularity::index_range`].
    pub fn from_time_index(granularity: Granularity, index: i64) -> Result<Self, PanelError> {
        if !granularity.index_range().contains(&index) {
            return Err(PanelError::IndexOutOfRange {
                index,
                granularity: granularity.time_type(),
            });
        }
        // Inside the index range every year fits in `0..=9999`.
        Ok(match granularity {
            Granularity::Day => PartialTime::Day(Day {
                date: day_from_index(index),
            }),
            Granularity::Month => {
                let (year, month) = epoch::month_from_index(index);
                PartialTime::Month(Month {
                    year: year as i32,
                    month,
                })
            }
            Granularity::Quarter => {
                let (year, quarter) = epoch::quarter_from_index(index);
                PartialTime::Quarter(Quarter {
                    year: year as i32,
                    quarter,
                })
            }
            Granularity::Week(start_on) => PartialTime::Week(Week {
                start: day_from_index(epoch::week_start_day_index(index, start_on.number())),
                start_on,
            }),
        })
    }

    /// The period `n` units away (negative `n` steps back).
    pub fn offset(&self, n: i64) -> Result<Self, PanelError> {
        Self::from_time_index(self.granularity(), self.time_index().saturating_add(n))
    }

    /// The next period.
    pub fn succ(&self) -> Result<Self, PanelError> {
        self.offset(1)
    }

    /// The previous period.
    pub fn pred(&self) -> Result<Self, PanelError> {
        self.offset(-1)
    }

    /// First day of the period.
    pub fn start_date(&self) -> NaiveDate {
        match self {
            PartialTime::Day(d) => d.date,
            PartialTime::Month(m) => m.start_date(),
            PartialTime::Quarter(q) => q.start_date(),
            PartialTime::Week(w) => w.start,
        }
    }

    /// First day after the period (exclusive end).
    pub fn end_date(&self) -> NaiveDate {
        match self {
            PartialTime::Day(d) => add_days(d.date, 1),
            PartialTime::Month(m) => m.end_date(),
            PartialTime::Quarter(q) => q.end_date(),
            PartialTime::Week(w) => add_days(w.start, 7),
        }
    }

    /// Whether `date` falls in `[start_date, end_date)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date() <= date && date < self.end_date()
    }

    /// Length of the period.
    ///
    /// ```
    /// use qtty::Days;
    /// use timepanel::{Month, PartialTime};
    ///
    /// let feb = PartialTime::from(Month::new(2012, 2).unwrap());
    /// assert_eq!(feb.span(), Days::new(29.0));
    /// ```
    pub fn span(&self) -> Days {
        Days::new((self.end_date() - self.start_date()).num_days() as f64)
    }
}

fn day_from_index(index: i64) -> NaiveDate {
    epoch::date_from_day_index(index).expect("index range maps to representable dates")
}

impl PartialOrd for PartialTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.granularity() == other.granularity() {
            Some(self.time_index().cmp(&other.time_index()))
        } else {
            None
        }
    }
}

impl fmt::Display for PartialTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.time_label())
    }
}

impl From<Day> for PartialTime {
    fn from(day: Day) -> Self {
        PartialTime::Day(day)
    }
}

impl From<Month> for PartialTime {
    fn from(month: Month) -> Self {
        PartialTime::Month(month)
    }
}

impl From<Quarter> for PartialTime {
    fn from(quarter: Quarter) -> Self {
        PartialTime::Quarter(quarter)
    }
}

impl From<Week> for PartialTime {
    fn from(week: Week) -> Self {
        PartialTime::Week(week)
    }
}

// Serde: a partial time travels as its smv_time key.
#[cfg(feature = "serde")]
impl Serialize for PartialTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.smv_time())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PartialTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl de::Visitor<'_> for KeyVisitor {
            type Value = PartialTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an smv_time key such as \"M201205\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<PartialTime, E> {
                PartialTime::from_smv_time(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quarter_pinned() {
        let q = PartialTime::from(Quarter::new(2012, 1).unwrap());
        assert_eq!(q.smv_time(), "Q201201");
        assert_eq!(q.time_index(), 168);
        assert_eq!(q.time_label(), "2012-Q1");
        assert_eq!(q.time_type(), "quarter");
    }

    #[test]
    fn test_month_pinned() {
        let m = PartialTime::from(Month::new(2012, 5).unwrap());
        assert_eq!(m.smv_time(), "M201205");
        assert_eq!(m.time_index(), 508);
        assert_eq!(m.time_label(), "2012-05");
        assert_eq!(m.time_type(), "month");
    }

    #[test]
    fn test_day_pinned() {
        let d = PartialTime::from(Day::new(2012, 5, 31).unwrap());
        assert_eq!(d.smv_time(), "D20120531");
        assert_eq!(d.time_index(), 15491);
        assert_eq!(d.time_label(), "2012-05-31");
        assert_eq!(d.time_type(), "day");
    }

    #[test]
    fn test_week_monday_pinned() {
        let w = PartialTime::from(Week::new(2012, 3, 4).unwrap());
        assert_eq!(w.smv_time(), "W20120227");
        assert_eq!(w.time_index(), 2200);
        assert_eq!(w.time_label(), "Week of 2012-02-27");
        assert_eq!(w.time_type(), "week");
    }

    #[test]
    fn test_week_sunday_pinned() {
        let w = PartialTime::from(Week::with_start_on(2012, 3, 4, "Sunday").unwrap());
        assert_eq!(w.smv_time(), "W(7)20120304");
        assert_eq!(w.time_index(), 2201);
        assert_eq!(w.time_label(), "Week of 2012-03-04");
        assert_eq!(w.time_type(), "week_start_on_Sunday");
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(
            Day::new(2012, 2, 30),
            Err(PanelError::InvalidDate { .. })
        ));
        assert!(matches!(
            Day::new(2011, 2, 29),
            Err(PanelError::InvalidDate { .. })
        ));
        assert!(Day::new(2012, 2, 29).is_ok());
        assert!(matches!(
            Day::new(2012, 4, 31),
            Err(PanelError::InvalidDate { .. })
        ));
        assert!(matches!(
            Month::new(2012, 13),
            Err(PanelError::InvalidDate { .. })
        ));
        assert!(matches!(
            Month::new(2012, 0),
            Err(PanelError::InvalidDate { .. })
        ));
        assert!(matches!(
            Quarter::new(2012, 5),
            Err(PanelError::InvalidDate { .. })
        ));
        assert!(matches!(
            Quarter::new(10_000, 1),
            Err(PanelError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_week_invalid_date_checked_before_weekday() {
        assert!(matches!(
            Week::with_start_on(2012, 2, 30, "Sunday"),
            Err(PanelError::InvalidDate { .. })
        ));
        assert!(matches!(
            Week::with_start_on(2012, 2, 30, "Someday"),
            Err(PanelError::InvalidDate { .. })
        ));
        assert_eq!(
            Week::with_start_on(2012, 3, 4, "sunday"),
            Err(PanelError::InvalidWeekday {
                name: "sunday".into()
            })
        );
    }

    #[test]
    fn test_week_normalisation_for_every_start() {
        let anchor = ymd(2012, 3, 4);
        for start_on in WeekStart::ALL {
            let w = Week::containing(anchor, start_on).unwrap();
            assert_eq!(w.start_date().weekday(), start_on.weekday());
            assert!(w.start_date() <= anchor);
            assert!((anchor - w.start_date()).num_days() < 7);
        }
    }

    #[test]
    fn test_week_anchor_on_start_day_is_kept() {
        let w = Week::new(2012, 2, 27).unwrap();
        assert_eq!(w.start_date(), ymd(2012, 2, 27));
        assert_eq!(w, Week::new(2012, 3, 4).unwrap());
    }

    #[test]
    fn test_week_normalises_across_year_boundary() {
        // 2012-01-01 is a Sunday.
        let w = Week::new(2012, 1, 1).unwrap();
        assert_eq!(w.smv_time(), "W20111226");
        assert_eq!(w.time_label(), "Week of 2011-12-26");
    }

    #[test]
    fn test_week_before_year_zero_is_rejected() {
        // 0000-01-01 is a Saturday.
        assert!(Week::new(0, 1, 1).is_err());
        assert!(Week::with_week_start(0, 1, 1, WeekStart::Saturday).is_ok());
    }

    #[test]
    fn test_index_steps_by_one() {
        let days = [ymd(2011, 12, 31), ymd(2012, 1, 1), ymd(2012, 2, 28), ymd(2012, 2, 29)];
        for date in days {
            let d = Day::from_date(date).unwrap();
            let next = Day::from_date(date.succ_opt().unwrap()).unwrap();
            assert_eq!(next.time_index() - d.time_index(), 1);
        }
        assert_eq!(
            Month::new(2013, 1).unwrap().time_index() - Month::new(2012, 12).unwrap().time_index(),
            1
        );
        assert_eq!(
            Quarter::new(2013, 1).unwrap().time_index()
                - Quarter::new(2012, 4).unwrap().time_index(),
            1
        );
        assert_eq!(
            Week::new(2012, 3, 5).unwrap().time_index() - Week::new(2012, 3, 4).unwrap().time_index(),
            1
        );
    }

    #[test]
    fn test_index_differences_count_units() {
        let a = Day::new(2000, 1, 1).unwrap();
        let b = Day::new(2001, 1, 1).unwrap();
        assert_eq!(b.time_index() - a.time_index(), 366);

        let a = Month::new(2010, 11).unwrap();
        let b = Month::new(2012, 2).unwrap();
        assert_eq!(b.time_index() - a.time_index(), 15);

        let a = Week::with_start_on(2012, 1, 1, "Sunday").unwrap();
        let b = Week::with_start_on(2012, 12, 30, "Sunday").unwrap();
        assert_eq!(b.time_index() - a.time_index(), 52);
    }

    #[test]
    fn test_from_time_index_roundtrip() {
        let values: [PartialTime; 5] = [
            Day::new(2012, 5, 31).unwrap().into(),
            Month::new(2012, 5).unwrap().into(),
            Quarter::new(2012, 1).unwrap().into(),
            Week::new(2012, 3, 4).unwrap().into(),
            Week::with_start_on(2012, 3, 4, "Thursday").unwrap().into(),
        ];
        for pt in values {
            let back = PartialTime::from_time_index(pt.granularity(), pt.time_index()).unwrap();
            assert_eq!(back, pt);
        }
    }

    #[test]
    fn test_from_time_index_out_of_range() {
        let err = PartialTime::from_time_index(Granularity::Month, 96_360).unwrap_err();
        assert_eq!(
            err,
            PanelError::IndexOutOfRange {
                index: 96_360,
                granularity: "month".into()
            }
        );
        assert!(PartialTime::from_time_index(Granularity::Day, i64::MIN).is_err());
    }

    #[test]
    fn test_offset_succ_pred() {
        let m = PartialTime::from(Month::new(2012, 12).unwrap());
        assert_eq!(m.succ().unwrap().smv_time(), "M201301");
        assert_eq!(m.pred().unwrap().smv_time(), "M201211");
        assert_eq!(m.offset(-12).unwrap().smv_time(), "M201112");

        let q = PartialTime::from(Quarter::new(2012, 4).unwrap());
        assert_eq!(q.succ().unwrap().time_label(), "2013-Q1");

        let w = PartialTime::from(Week::with_start_on(2012, 3, 4, "Sunday").unwrap());
        assert_eq!(w.succ().unwrap().smv_time(), "W(7)20120311");

        let last = PartialTime::from(Day::new(9999, 12, 31).unwrap());
        assert!(matches!(
            last.succ(),
            Err(PanelError::IndexOutOfRange { .. })
        ));
        assert!(last.offset(i64::MAX).is_err());
    }

    #[test]
    fn test_containing() {
        let date = ymd(2012, 3, 4);
        assert_eq!(
            PartialTime::containing(date, Granularity::Day).unwrap().smv_time(),
            "D20120304"
        );
        assert_eq!(
            PartialTime::containing(date, Granularity::Month).unwrap().smv_time(),
            "M201203"
        );
        assert_eq!(
            PartialTime::containing(date, Granularity::Quarter).unwrap().smv_time(),
            "Q201201"
        );
        assert_eq!(
            PartialTime::containing(date, Granularity::Week(WeekStart::Monday))
                .unwrap()
                .smv_time(),
            "W20120227"
        );
        assert!(PartialTime::containing(ymd(10_000, 1, 1), Granularity::Day).is_err());
    }

    #[test]
    fn test_calendar_interval() {
        let q = PartialTime::from(Quarter::new(2012, 4).unwrap());
        assert_eq!(q.start_date(), ymd(2012, 10, 1));
        assert_eq!(q.end_date(), ymd(2013, 1, 1));
        assert_eq!(q.span(), Days::new(92.0));
        assert!(q.contains(ymd(2012, 12, 31)));
        assert!(!q.contains(ymd(2013, 1, 1)));

        let w = PartialTime::from(Week::new(2012, 3, 4).unwrap());
        assert_eq!(w.end_date(), ymd(2012, 3, 5));
        assert_eq!(w.span(), Days::new(7.0));

        let d = PartialTime::from(Day::new(2012, 5, 31).unwrap());
        assert_eq!(d.span(), Days::new(1.0));
        assert!(d.contains(ymd(2012, 5, 31)));
    }

    #[test]
    fn test_every_date_lies_in_its_containing_period() {
        let mut date = ymd(2011, 12, 20);
        while date < ymd(2012, 4, 10) {
            for granularity in [
                Granularity::Day,
                Granularity::Month,
                Granularity::Quarter,
                Granularity::Week(WeekStart::Monday),
                Granularity::Week(WeekStart::Friday),
            ] {
                let pt = PartialTime::containing(date, granularity).unwrap();
                assert!(pt.contains(date), "{pt} should hold {date}");
            }
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_ordering_within_granularity_only() {
        let a = PartialTime::from(Month::new(2012, 1).unwrap());
        let b = PartialTime::from(Month::new(2012, 2).unwrap());
        let d = PartialTime::from(Day::new(2012, 1, 1).unwrap());
        assert!(a < b);
        assert_eq!(a.partial_cmp(&d), None);

        let mon = PartialTime::from(Week::new(2012, 3, 4).unwrap());
        let sun = PartialTime::from(Week::with_start_on(2012, 3, 4, "Sunday").unwrap());
        assert_eq!(mon.partial_cmp(&sun), None);
    }

    #[test]
    fn test_accessors_are_deterministic() {
        let w = PartialTime::from(Week::with_start_on(2012, 3, 4, "Sunday").unwrap());
        assert_eq!(w.smv_time(), w.smv_time());
        assert_eq!(w.time_label(), w.time_label());
        assert_eq!(format!("{w}"), "Week of 2012-03-04");
    }

    #[test]
    fn test_values_are_send_sync_copy() {
        fn assert_impl<T: Send + Sync + Copy>() {}
        assert_impl::<PartialTime>();
    }
}
