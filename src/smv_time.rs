// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Parsing of `smv_time` keys.
//!
//! Keys are the string column values produced by `smv_time()`. Parsing
//! accepts canonical keys only, so every parsed key renders back to the
//! exact same string:
//!
//! | Key | Value |
//! |-----|-------|
//! | `Q201201` | `Quarter(2012, 1)` |
//! | `M201205` | `Month(2012, 5)` |
//! | `D20120531` | `Day(2012, 5, 31)` |
//! | `W20120227` | Monday week starting 2012-02-27 |
//! | `W(7)20120304` | Sunday week starting 2012-03-04 |
//!
//! The `smv_time_to_*` helpers map a key straight to one of its derived
//! values, the way a derived column is computed from a key column.

use chrono::{Datelike, NaiveDate};
use std::str::FromStr;
use tracing::trace;

use crate::error::PanelError;
use crate::partial_time::{Day, Month, PartialTime, Quarter, Week};
use crate::weekday::WeekStart;

impl PartialTime {
    /// Parses a canonical `smv_time` key.
    ///
    /// # Errors
    ///
    /// [`PanelError::InvalidSmvTime`] if the key is malformed, names a
    /// non-existent period, or is not in canonical form (a week key whose
    /// date is not on its start weekday, or an explicit `W(1)` prefix).
    ///
    /// ```
    /// use timepanel::PartialTime;
    ///
    /// let w = PartialTime::from_smv_time("W(7)20120304").unwrap();
    /// assert_eq!(w.time_index(), 2201);
    /// assert_eq!(w.time_type(), "week_start_on_Sunday");
    /// assert!(PartialTime::from_smv_time("W20120304").is_err());
    /// ```
    pub fn from_smv_time(key: &str) -> Result<Self, PanelError> {
        trace!(key, "parsing smv_time key");
        if !key.is_ascii() {
            return Err(PanelError::invalid_smv_time(key, "non-ASCII characters"));
        }
        let (kind, body) = key.split_at(key.len().min(1));
        let parsed = match kind {
            "Q" => {
                let [year, quarter] = fields(key, body, [4, 2])?;
                Quarter::new(year as i32, quarter).map(PartialTime::from)
            }
            "M" => {
                let [year, month] = fields(key, body, [4, 2])?;
                Month::new(year as i32, month).map(PartialTime::from)
            }
            "D" => {
                let [year, month, day] = fields(key, body, [4, 2, 2])?;
                Day::new(year as i32, month, day).map(PartialTime::from)
            }
            "W" => return parse_week(key, body),
            "" => return Err(PanelError::invalid_smv_time(key, "empty key")),
            _ => {
                return Err(PanelError::invalid_smv_time(
                    key,
                    "unknown granularity prefix, expected Q, M, D or W",
                ))
            }
        };
        parsed.map_err(|err| PanelError::invalid_smv_time(key, err.to_string()))
    }
}

impl FromStr for PartialTime {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_smv_time(s)
    }
}

fn parse_week(key: &str, body: &str) -> Result<PartialTime, PanelError> {
    let (start_on, digits) = match body.strip_prefix('(') {
        Some(rest) => {
            let (number, digits) = rest
                .split_once(')')
                .ok_or_else(|| PanelError::invalid_smv_time(key, "unterminated week start"))?;
            let start_on = number
                .parse::<u32>()
                .ok()
                .filter(|n| number.len() == 1 && *n != 1)
                .and_then(WeekStart::from_number)
                .ok_or_else(|| {
                    PanelError::invalid_smv_time(key, "week start must be a digit in 2..=7")
                })?;
            (start_on, digits)
        }
        None => (WeekStart::Monday, body),
    };
    let [year, month, day] = fields(key, digits, [4, 2, 2])?;
    let week = Week::with_week_start(year as i32, month, day, start_on)
        .map_err(|err| PanelError::invalid_smv_time(key, err.to_string()))?;
    let start = week.start_date();
    if (start.year(), start.month(), start.day()) != (year as i32, month, day) {
        return Err(PanelError::invalid_smv_time(
            key,
            format!("date is not a {start_on}"),
        ));
    }
    Ok(week.into())
}

/// Splits `body` into fixed-width decimal fields.
fn fields<const N: usize>(
    key: &str,
    body: &str,
    widths: [usize; N],
) -> Result<[u32; N], PanelError> {
    let expected: usize = widths.iter().sum();
    if body.len() != expected || !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PanelError::invalid_smv_time(
            key,
            format!("expected {expected} digits after the prefix"),
        ));
    }
    let mut out = [0u32; N];
    let mut rest = body;
    for (slot, width) in out.iter_mut().zip(widths) {
        let (field, tail) = rest.split_at(width);
        *slot = field
            .parse()
            .map_err(|_| PanelError::invalid_smv_time(key, "malformed digits"))?;
        rest = tail;
    }
    Ok(out)
}

/// Time index of the period named by `key`.
///
/// ```
/// assert_eq!(timepanel::smv_time_to_index("M201205").unwrap(), 508);
/// ```
pub fn smv_time_to_index(key: &str) -> Result<i64, PanelError> {
    Ok(PartialTime::from_smv_time(key)?.time_index())
}

/// Human-readable label of the period named by `key`.
pub fn smv_time_to_label(key: &str) -> Result<String, PanelError> {
    Ok(PartialTime::from_smv_time(key)?.time_label())
}

/// Granularity tag of the period named by `key`.
pub fn smv_time_to_type(key: &str) -> Result<String, PanelError> {
    Ok(PartialTime::from_smv_time(key)?.time_type())
}

/// First day of the period named by `key`.
pub fn smv_time_to_date(key: &str) -> Result<NaiveDate, PanelError> {
    Ok(PartialTime::from_smv_time(key)?.start_date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pinned_keys() {
        assert_eq!(
            PartialTime::from_smv_time("Q201201").unwrap(),
            PartialTime::from(Quarter::new(2012, 1).unwrap())
        );
        assert_eq!(
            PartialTime::from_smv_time("M201205").unwrap(),
            PartialTime::from(Month::new(2012, 5).unwrap())
        );
        assert_eq!(
            PartialTime::from_smv_time("D20120531").unwrap(),
            PartialTime::from(Day::new(2012, 5, 31).unwrap())
        );
        assert_eq!(
            PartialTime::from_smv_time("W20120227").unwrap(),
            PartialTime::from(Week::new(2012, 3, 4).unwrap())
        );
        assert_eq!(
            "W(7)20120304".parse::<PartialTime>().unwrap(),
            PartialTime::from(Week::with_start_on(2012, 3, 4, "Sunday").unwrap())
        );
    }

    #[test]
    fn test_every_week_start_roundtrips() {
        for start_on in WeekStart::ALL {
            let week = PartialTime::from(Week::with_week_start(2012, 3, 4, start_on).unwrap());
            let key = week.smv_time();
            assert_eq!(PartialTime::from_smv_time(&key).unwrap(), week, "{key}");
        }
    }

    #[test]
    fn test_rejects_malformed_keys() {
        for key in [
            "",
            "Q",
            "X201201",
            "Q20121",
            "Q2012011",
            "M2012-5",
            "D2012053",
            "m201205",
            "Q+20121",
            "W(7",
            "W(8)20120304",
            "W(0)20120304",
            "W(07)20120304",
            "Dé0120531",
        ] {
            assert!(
                matches!(
                    PartialTime::from_smv_time(key),
                    Err(PanelError::InvalidSmvTime { .. })
                ),
                "{key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_non_existent_periods() {
        for key in ["Q201205", "Q201200", "M201213", "M201200", "D20120230", "D20110229"] {
            assert!(
                matches!(
                    PartialTime::from_smv_time(key),
                    Err(PanelError::InvalidSmvTime { .. })
                ),
                "{key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_non_canonical_weeks() {
        // 2012-03-04 is a Sunday, not a Monday.
        assert!(PartialTime::from_smv_time("W20120304").is_err());
        // Monday weeks never carry an explicit start number.
        assert!(PartialTime::from_smv_time("W(1)20120227").is_err());
        // 2012-02-27 is a Monday, not a Sunday.
        assert!(PartialTime::from_smv_time("W(7)20120227").is_err());
    }

    #[test]
    fn test_key_helpers() {
        assert_eq!(smv_time_to_index("Q201201").unwrap(), 168);
        assert_eq!(smv_time_to_index("W20120227").unwrap(), 2200);
        assert_eq!(smv_time_to_label("D20120531").unwrap(), "2012-05-31");
        assert_eq!(smv_time_to_label("W(7)20120304").unwrap(), "Week of 2012-03-04");
        assert_eq!(smv_time_to_type("M201205").unwrap(), "month");
        assert_eq!(smv_time_to_type("W(7)20120304").unwrap(), "week_start_on_Sunday");
        assert_eq!(
            smv_time_to_date("Q201203").unwrap(),
            NaiveDate::from_ymd_opt(2012, 7, 1).unwrap()
        );
        assert!(smv_time_to_index("nope").is_err());
    }
}
