// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Week-start configuration.

use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

use crate::error::PanelError;

/// The weekday a [`Week`](crate::Week) is aligned to.
///
/// Parsed from one of the seven English weekday names (`"Monday"` ..
/// `"Sunday"`, case-sensitive). Defaults to Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeekStart {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekStart {
    /// All week starts, Monday first.
    pub const ALL: [WeekStart; 7] = [
        WeekStart::Monday,
        WeekStart::Tuesday,
        WeekStart::Wednesday,
        WeekStart::Thursday,
        WeekStart::Friday,
        WeekStart::Saturday,
        WeekStart::Sunday,
    ];

    /// The English weekday name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            WeekStart::Monday => "Monday",
            WeekStart::Tuesday => "Tuesday",
            WeekStart::Wednesday => "Wednesday",
            WeekStart::Thursday => "Thursday",
            WeekStart::Friday => "Friday",
            WeekStart::Saturday => "Saturday",
            WeekStart::Sunday => "Sunday",
        }
    }

    /// ISO weekday number: Monday = 1 .. Sunday = 7.
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Inverse of [`WeekStart::number`].
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=7 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }

    /// The matching `chrono` weekday.
    pub const fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Days to step back from a date falling on `weekday` to reach the most
    /// recent occurrence of this week start (`0..=6`).
    pub(crate) fn days_since(self, weekday: Weekday) -> u32 {
        (weekday.number_from_monday() + 7 - self.number()) % 7
    }
}

impl From<Weekday> for WeekStart {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        start.weekday()
    }
}

impl FromStr for WeekStart {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|start| start.name() == s)
            .ok_or_else(|| PanelError::InvalidWeekday { name: s.to_owned() })
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
