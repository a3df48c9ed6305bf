// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Closed-form conversions between calendar values and dense time indices.
//!
//! Every granularity counts from the Unix epoch:
//!
//! | Granularity | Index 0 |
//! |-------------|---------|
//! | Day | 1970-01-01 |
//! | Month | 1970-01 |
//! | Quarter | 1970-Q1 |
//! | Week | the week whose start day index lies in `-7..=-1` (Monday weeks: 1969-12-29) |
//!
//! All conversions are O(1); nothing here iterates from the epoch.

use chrono::{Datelike, NaiveDate};

use crate::error::PanelError;

/// Smallest supported year (keys carry a four-digit year).
pub(crate) const MIN_YEAR: i32 = 0;

/// Largest supported year.
pub(crate) const MAX_YEAR: i32 = 9999;

const EPOCH_YEAR: i64 = 1970;

/// `NaiveDate::num_days_from_ce()` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Week index = `floor(day_index(start) / 7) - WEEK_EPOCH_OFFSET`.
const WEEK_EPOCH_OFFSET: i64 = -1;

/// ISO weekday number (Monday = 1) of day index 0, a Thursday.
const EPOCH_WEEKDAY: i64 = 4;

pub(crate) fn check_year(year: i32) -> Result<(), PanelError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(PanelError::invalid_date(format!(
            "year {year} is outside {MIN_YEAR}..={MAX_YEAR}"
        )))
    }
}

// ── Quarter ───────────────────────────────────────────────────────────────

#[inline]
pub(crate) const fn quarter_index(year: i32, quarter: u32) -> i64 {
    year as i64 * 4 + (quarter as i64 - 1) - EPOCH_YEAR * 4
}

/// Inverse of [`quarter_index`]: `(year, quarter)`.
#[inline]
pub(crate) const fn quarter_from_index(index: i64) -> (i64, u32) {
    let total = index + EPOCH_YEAR * 4;
    (total.div_euclid(4), total.rem_euclid(4) as u32 + 1)
}

// ── Month ─────────────────────────────────────────────────────────────────

#[inline]
pub(crate) const fn month_index(year: i32, month: u32) -> i64 {
    year as i64 * 12 + (month as i64 - 1) - EPOCH_YEAR * 12
}

/// Inverse of [`month_index`]: `(year, month)`.
#[inline]
pub(crate) const fn month_from_index(index: i64) -> (i64, u32) {
    let total = index + EPOCH_YEAR * 12;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

// ── Day ───────────────────────────────────────────────────────────────────

/// Days since 1970-01-01 in the proleptic Gregorian calendar.
#[inline]
pub(crate) fn day_index(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - UNIX_EPOCH_DAYS_FROM_CE
}

/// Inverse of [`day_index`]; `None` outside chrono's representable range.
pub(crate) fn date_from_day_index(index: i64) -> Option<NaiveDate> {
    let days_from_ce = i32::try_from(index + UNIX_EPOCH_DAYS_FROM_CE).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days_from_ce)
}

// ── Week ──────────────────────────────────────────────────────────────────

/// Week index of a week whose (already normalised) first day is `start`.
#[inline]
pub(crate) fn week_index(start: NaiveDate) -> i64 {
    day_index(start).div_euclid(7) - WEEK_EPOCH_OFFSET
}

/// Day index of the first day of week `index` for weeks starting on the
/// ISO weekday number `start_on` (Monday = 1 .. Sunday = 7).
#[inline]
pub(crate) const fn week_start_day_index(index: i64, start_on: u32) -> i64 {
    (index + WEEK_EPOCH_OFFSET) * 7 + (start_on as i64 - EPOCH_WEEKDAY).rem_euclid(7)
}
