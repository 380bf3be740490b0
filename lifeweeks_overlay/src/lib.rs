// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifeweeks Overlay: life events on top of a week grid.
//!
//! A [`LifeEvent`] is a named, colored date range. This crate answers two
//! questions about a list of them:
//!
//! - Which color does each week cell get? See [`shade_week`] and
//!   [`EventList::event_for_date`]. A week belongs to an event when the
//!   week's first day falls inside the event, and the first event in list
//!   order wins when several overlap.
//! - Where do markers, labels, and connectors go? See [`layout_events`].
//!   Single-week events get a ring around their cell and a straight
//!   connector. Longer events get an elbowed connector to the midpoint of
//!   their first and last cells. Labels sit in a column to the right of the
//!   grid.
//!
//! Layout is in world space and performs no collision avoidance between
//! labels.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use lifeweeks_grid::{CellMetrics, GridGeometry, GridLayout, LifeSpan};
//! use lifeweeks_overlay::{EventKind, EventList, LifeEvent, OverlayConfig, layout_events};
//!
//! let span = LifeSpan::new(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(), 80);
//! let grid = GridGeometry::for_lifespan(&span, GridLayout::Calendar, CellMetrics::default());
//!
//! let mut events = EventList::new();
//! let day = span.date_of_week(100).unwrap();
//! events.push(LifeEvent::from_hex("Graduation", "#16a34a", day, day).unwrap());
//!
//! let overlays = layout_events(&events, &span, &grid, &OverlayConfig::default());
//! assert_eq!(overlays.len(), 1);
//! assert_eq!(overlays[0].kind, EventKind::Point);
//! assert!(overlays[0].ring.is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod layout;
mod shade;

pub use event::{EventList, LifeEvent, ParseEventError, parse_css_color};
pub use layout::{
    Connector, EventKind, EventOverlay, OverlayConfig, label_column_x, layout_event, layout_events,
};
pub use shade::{WeekShade, shade_week};
