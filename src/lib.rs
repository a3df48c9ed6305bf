// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar partial-time primitives.
//!
//! A *partial time* is a calendar period of a fixed granularity: a day, a
//! week, a month or a quarter. Each one maps to a sortable string key, a
//! dense integer index and a human-readable label, which makes it usable as
//! a join or partition key in tabular data.
//!
//! # Core types
//!
//! - [`Day`], [`Week`], [`Month`], [`Quarter`] — one value type per granularity.
//! - [`PartialTime`] — sum type over the four.
//! - [`Granularity`] — the granularity tag, weeks carrying their [`WeekStart`].
//! - [`TimePanel`] — a contiguous, gap-free run of one granularity.
//! - [`PanelError`] — the error returned by every fallible operation.
//!
//! # Keys and indices
//!
//! | Value | `smv_time()` | `time_index()` | `time_label()` | `time_type()` |
//! |-------|--------------|----------------|----------------|---------------|
//! | `Quarter(2012, 1)` | `Q201201` | 168 | `2012-Q1` | `quarter` |
//! | `Month(2012, 5)` | `M201205` | 508 | `2012-05` | `month` |
//! | `Day(2012, 5, 31)` | `D20120531` | 15491 | `2012-05-31` | `day` |
//! | `Week(2012, 3, 4)` | `W20120227` | 2200 | `Week of 2012-02-27` | `week` |
//! | `Week(2012, 3, 4, Sunday)` | `W(7)20120304` | 2201 | `Week of 2012-03-04` | `week_start_on_Sunday` |
//!
//! Indices count from the Unix epoch (1970-01-01, 1970-01, 1970-Q1) and grow
//! by exactly one per period. Supported years are `0..=9999`.
//!
//! # Example
//!
//! ```
//! use timepanel::{Day, TimePanel};
//!
//! let panel = TimePanel::new(Day::new(2012, 1, 1)?, Day::new(2013, 12, 31)?)?;
//! assert_eq!(panel.len(), 731);
//! assert_eq!(panel.iter().nth(59).map(|d| d.smv_time()), Some("D20120229".into()));
//! # Ok::<(), timepanel::PanelError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialise [`PartialTime`] as its `smv_time` key and
//!   [`TimePanel`] as `{"start": key, "end": key}`.

mod epoch;
mod error;
mod granularity;
mod panel;
mod partial_time;
mod smv_time;
mod weekday;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::PanelError;
pub use granularity::Granularity;
pub use panel::{TimePanel, TimePanelIter};
pub use partial_time::{Day, Month, PartialTime, Quarter, Week};
pub use smv_time::{smv_time_to_date, smv_time_to_index, smv_time_to_label, smv_time_to_type};
pub use weekday::WeekStart;
