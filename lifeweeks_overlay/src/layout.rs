// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Circle, Line, Point};
use lifeweeks_grid::{GridGeometry, LifeSpan};

use crate::event::{EventList, LifeEvent};

/// Whether an event occupies one week or several.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Start and end fall in the same week; drawn with a ring marker.
    Point,
    /// Start and end fall in different weeks.
    Span,
}

/// Path joining an event label to its anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Connector {
    /// A single horizontal segment from the label column to the anchor.
    Straight(Line),
    /// A vertical segment along the label column edge, then a horizontal
    /// segment to the anchor.
    Elbow([Line; 2]),
}

impl Connector {
    /// The segments of this connector, in drawing order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        match self {
            Self::Straight(line) => core::slice::from_ref(line),
            Self::Elbow(lines) => lines,
        }
    }

    /// Returns `true` for an elbowed connector.
    #[must_use]
    pub fn is_elbow(&self) -> bool {
        matches!(self, Self::Elbow(_))
    }
}

/// Spacing of the label column placed to the right of the grid.
///
/// All values are world-space pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayConfig {
    /// Width reserved for labels.
    pub label_column_width: f64,
    /// Gap between the grid's right edge and the label column.
    pub label_gutter: f64,
    /// Distance from the cell edge to a point event's ring.
    pub ring_padding: f64,
    /// Distance from the column edge to the label text.
    pub label_inset: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            label_column_width: 150.0,
            label_gutter: 20.0,
            ring_padding: 1.0,
            label_inset: 4.0,
        }
    }
}

/// Placement of one event's marker, label, and connector in world space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EventOverlay {
    /// Index of the event in its [`EventList`].
    pub index: usize,
    /// Point or span.
    pub kind: EventKind,
    /// First week drawn, clamped to the grid.
    pub start_week: u32,
    /// Last week drawn, clamped to the grid.
    pub end_week: u32,
    /// Point on the grid the connector ends at.
    pub anchor: Point,
    /// Ring around the cell, only for [`EventKind::Point`].
    pub ring: Option<Circle>,
    /// Text origin inside the label column. Text is left aligned and
    /// vertically centered on this point.
    pub label_origin: Point,
    /// Path from the label column to `anchor`.
    pub connector: Connector,
}

/// Left edge of the label column.
#[must_use]
pub fn label_column_x(grid: &GridGeometry, config: &OverlayConfig) -> f64 {
    grid.extent().width + config.label_gutter
}

/// Lays out every event that intersects the grid, in list order.
///
/// Events that end before week 0 or start after the last week are
/// skipped. Events that overhang either end are clamped to the grid, but
/// keep the kind their unclamped weeks give them.
#[must_use]
pub fn layout_events(
    events: &EventList,
    span: &LifeSpan,
    grid: &GridGeometry,
    config: &OverlayConfig,
) -> Vec<EventOverlay> {
    events
        .iter()
        .enumerate()
        .filter_map(|(index, event)| layout_event(index, event, span, grid, config))
        .collect()
}

/// Lays out a single event, or returns `None` if it misses the grid.
#[must_use]
pub fn layout_event(
    index: usize,
    event: &LifeEvent,
    span: &LifeSpan,
    grid: &GridGeometry,
    config: &OverlayConfig,
) -> Option<EventOverlay> {
    let last = i64::from(grid.total_weeks()) - 1;
    let raw_start = span.week_of_date(event.start());
    let raw_end = span.week_of_date(event.end());
    if last < 0 || raw_end < 0 || raw_start > last {
        return None;
    }
    let kind = if raw_start == raw_end {
        EventKind::Point
    } else {
        EventKind::Span
    };
    let start_week = u32::try_from(raw_start.clamp(0, last)).ok()?;
    let end_week = u32::try_from(raw_end.clamp(0, last)).ok()?;

    let column_x = label_column_x(grid, config);
    let start_center = grid.center_of_week(start_week)?;
    let overlay = match kind {
        EventKind::Point => {
            let anchor = start_center;
            let radius = grid.metrics().size / 2.0 + config.ring_padding;
            EventOverlay {
                index,
                kind,
                start_week,
                end_week,
                anchor,
                ring: Some(Circle::new(anchor, radius)),
                label_origin: Point::new(column_x + config.label_inset, anchor.y),
                connector: Connector::Straight(Line::new((column_x, anchor.y), anchor)),
            }
        }
        EventKind::Span => {
            let end_center = grid.center_of_week(end_week)?;
            let anchor = start_center.midpoint(end_center);
            let corner = Point::new(column_x, anchor.y);
            EventOverlay {
                index,
                kind,
                start_week,
                end_week,
                anchor,
                ring: None,
                label_origin: Point::new(column_x + config.label_inset, start_center.y),
                connector: Connector::Elbow([
                    Line::new((column_x, start_center.y), corner),
                    Line::new(corner, anchor),
                ]),
            }
        }
    };
    Some(overlay)
}
