// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time panels: contiguous runs of partial times.
//!
//! This module provides:
//! - [`TimePanel`]: an inclusive `[start, end]` range of one granularity
//! - [`TimePanelIter`]: the lazy, restartable walk over a panel

use std::fmt;
use std::iter::FusedIterator;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PanelError;
use crate::granularity::Granularity;
use crate::partial_time::PartialTime;

/// An ordered, gap-free run of partial times spanning `[start, end]`.
///
/// The panel stores only its endpoints; members are produced on demand by
/// [`TimePanel::iter`].
///
/// # Examples
///
/// ```
/// use timepanel::{Day, Month, PanelError, TimePanel};
///
/// let panel = TimePanel::new(Month::new(2012, 11)?, Month::new(2013, 2)?)?;
/// assert_eq!(panel.len(), 4);
/// assert_eq!(
///     panel.smv_times(),
///     vec!["M201211", "M201212", "M201301", "M201302"]
/// );
///
/// let mixed = TimePanel::new(Month::new(2012, 1)?, Day::new(2012, 1, 1)?);
/// assert!(matches!(mixed, Err(PanelError::IncompatibleGranularity { .. })));
/// # Ok::<(), PanelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimePanel {
    start: PartialTime,
    end: PartialTime,
}

impl TimePanel {
    /// Creates a panel from its first and last member.
    ///
    /// # Errors
    ///
    /// - [`PanelError::IncompatibleGranularity`] if the endpoints differ in
    ///   granularity or, for weeks, in start weekday.
    /// - [`PanelError::EmptyRange`] if `start` comes after `end`.
    pub fn new(
        start: impl Into<PartialTime>,
        end: impl Into<PartialTime>,
    ) -> Result<Self, PanelError> {
        let (start, end) = (start.into(), end.into());
        if start.granularity() != end.granularity() {
            return Err(PanelError::IncompatibleGranularity {
                start: start.time_type(),
                end: end.time_type(),
            });
        }
        let (first, last) = (start.time_index(), end.time_index());
        if first > last {
            return Err(PanelError::EmptyRange {
                start: first,
                end: last,
            });
        }
        debug!(
            granularity = %start.granularity(),
            start = %start.smv_time(),
            end = %end.smv_time(),
            len = last - first + 1,
            "time panel created"
        );
        Ok(Self { start, end })
    }

    pub fn start(&self) -> PartialTime {
        self.start
    }

    pub fn end(&self) -> PartialTime {
        self.end
    }

    pub fn granularity(&self) -> Granularity {
        self.start.granularity()
    }

    /// Number of members: `end.time_index() - start.time_index() + 1`.
    pub fn len(&self) -> usize {
        (self.end.time_index() - self.start.time_index() + 1) as usize
    }

    /// Always `false`: a panel holds at least its start.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `value` is a member of the panel.
    pub fn contains(&self, value: &PartialTime) -> bool {
        value.granularity() == self.granularity()
            && (self.start.time_index()..=self.end.time_index()).contains(&value.time_index())
    }

    /// Members in ascending index order.
    pub fn iter(&self) -> TimePanelIter {
        TimePanelIter {
            granularity: self.granularity(),
            next: self.start.time_index(),
            last: self.end.time_index(),
        }
    }

    /// All members, materialised.
    pub fn partial_times(&self) -> Vec<PartialTime> {
        self.iter().collect()
    }

    /// The `smv_time` key of every member, in order.
    pub fn smv_times(&self) -> Vec<String> {
        self.iter().map(|pt| pt.smv_time()).collect()
    }
}

impl fmt::Display for TimePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<'a> IntoIterator for &'a TimePanel {
    type Item = PartialTime;
    type IntoIter = TimePanelIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of a [`TimePanel`].
///
/// Walks time indices `next..=last`; both ends are valid indices of the
/// granularity, so every step maps back to a value.
#[derive(Debug, Clone)]
pub struct TimePanelIter {
    granularity: Granularity,
    next: i64,
    last: i64,
}

impl TimePanelIter {
    fn member(&self, index: i64) -> PartialTime {
        PartialTime::from_time_index(self.granularity, index)
            .expect("panel indices lie between two valid endpoints")
    }
}

impl Iterator for TimePanelIter {
    type Item = PartialTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let value = self.member(self.next);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last - self.next + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for TimePanelIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let value = self.member(self.last);
        self.last -= 1;
        Some(value)
    }
}

impl ExactSizeIterator for TimePanelIter {}

impl FusedIterator for TimePanelIter {}

// Serde: `{"start": "<key>", "end": "<key>"}`; deserialisation re-validates.
#[cfg(feature = "serde")]
impl Serialize for TimePanel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("TimePanel", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimePanel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: PartialTime,
            end: PartialTime,
        }

        let raw = Raw::deserialize(deserializer)?;
        TimePanel::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
