// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation of the crate.

/// Failure returned by partial-time constructors, key parsing and panel
/// construction.
///
/// All variants are terminal: calendar arithmetic is pure, so retrying the
/// same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    /// The calendar inputs do not name an existing Gregorian date, month or
    /// quarter, or the year falls outside `0..=9999`.
    #[error("invalid date: {reason}")]
    InvalidDate {
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// `start_on` is not one of the seven English weekday names.
    #[error("invalid week start {name:?}: expected one of Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday")]
    InvalidWeekday {
        /// The rejected name.
        name: String,
    },

    /// Panel endpoints differ in granularity or week start.
    #[error("incompatible granularity: start is {start}, end is {end}")]
    IncompatibleGranularity {
        /// `time_type()` of the start endpoint.
        start: String,
        /// `time_type()` of the end endpoint.
        end: String,
    },

    /// Panel start comes after its end.
    #[error("empty range: start index {start} is after end index {end}")]
    EmptyRange {
        /// Time index of the start endpoint.
        start: i64,
        /// Time index of the end endpoint.
        end: i64,
    },

    /// A string is not a canonical `smv_time` key.
    #[error("invalid smv time {value:?}: {reason}")]
    InvalidSmvTime {
        /// The rejected key.
        value: String,
        /// What made it invalid.
        reason: String,
    },

    /// A time index maps to a period outside the supported year range.
    #[error("time index {index} is out of range for {granularity}")]
    IndexOutOfRange {
        /// The rejected index.
        index: i64,
        /// `time_type()` of the requested granularity.
        granularity: String,
    },
}

impl PanelError {
    pub(crate) fn invalid_date(reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_smv_time(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSmvTime {
            value: value.to_owned(),
            reason: reason.into(),
        }
    }
}
