// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::metrics::{Cell, CellMetrics};
use crate::span::LifeSpan;

/// Number of columns in the calendar layout.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Strategy for arranging weeks into rows and columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridLayout {
    /// One row per year, one column per week of the year.
    #[default]
    Calendar,
    /// A roughly square block: `floor(sqrt(total_weeks))` columns.
    Packed,
}

impl GridLayout {
    /// Number of columns used for a grid of `total_weeks` cells.
    ///
    /// Always at least one, so row arithmetic never divides by zero.
    #[must_use]
    pub fn columns(self, total_weeks: u32) -> u32 {
        match self {
            Self::Calendar => WEEKS_PER_YEAR,
            Self::Packed => total_weeks.isqrt().max(1),
        }
    }
}

/// Resolved grid dimensions for one lifespan and layout.
///
/// This is a cheap value type; rebuild it whenever the lifespan, the layout,
/// or the cell metrics change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGeometry {
    layout: GridLayout,
    metrics: CellMetrics,
    total_weeks: u32,
    cols: u32,
    rows: u32,
}

impl GridGeometry {
    /// Creates a geometry for `total_weeks` cells.
    #[must_use]
    pub fn new(layout: GridLayout, total_weeks: u32, metrics: CellMetrics) -> Self {
        let cols = layout.columns(total_weeks);
        Self {
            layout,
            metrics,
            total_weeks,
            cols,
            rows: total_weeks.div_ceil(cols),
        }
    }

    /// Creates a geometry covering every week of `span`.
    #[must_use]
    pub fn for_lifespan(span: &LifeSpan, layout: GridLayout, metrics: CellMetrics) -> Self {
        Self::new(layout, span.total_weeks(), metrics)
    }

    /// Returns the layout strategy.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Returns the cell metrics.
    #[must_use]
    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Number of cells in the grid.
    #[must_use]
    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows, counting a partially filled last row.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_weeks == 0
    }

    /// Maps a week index to its cell, or `None` if it lies outside the grid.
    #[must_use]
    pub fn cell_of(&self, week: u32) -> Option<Cell> {
        if week >= self.total_weeks {
            return None;
        }
        Some(Cell::new(week % self.cols, week / self.cols))
    }

    /// Like [`GridGeometry::cell_of`], but treats an out-of-range week as a
    /// caller bug in debug builds.
    ///
    /// Release builds return `None` so a frame can skip the cell instead of
    /// aborting.
    #[must_use]
    pub fn cell_of_checked(&self, week: u32) -> Option<Cell> {
        let cell = self.cell_of(week);
        debug_assert!(
            cell.is_some(),
            "week {week} is outside a grid of {} weeks",
            self.total_weeks
        );
        cell
    }

    /// Maps a cell back to its week index.
    #[must_use]
    pub fn week_of(&self, cell: Cell) -> Option<u32> {
        if cell.col >= self.cols {
            return None;
        }
        let week = cell.row.checked_mul(self.cols)?.checked_add(cell.col)?;
        (week < self.total_weeks).then_some(week)
    }

    /// World-space top-left corner of `week`.
    #[must_use]
    pub fn pixel_of_week(&self, week: u32) -> Option<Point> {
        self.cell_of(week).map(|cell| self.metrics.pixel_of(cell))
    }

    /// World-space center of `week`.
    #[must_use]
    pub fn center_of_week(&self, week: u32) -> Option<Point> {
        self.cell_of(week).map(|cell| self.metrics.cell_center(cell))
    }

    /// Pixel size of the whole grid in world space.
    ///
    /// An empty grid has no extent, whatever its column count.
    #[must_use]
    pub fn extent(&self) -> Size {
        if self.is_empty() {
            return Size::ZERO;
        }
        Size::new(self.metrics.span(self.cols), self.metrics.span(self.rows))
    }

    /// World-space rectangle covered by the grid, anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.extent())
    }

    /// Cell under a world-space point.
    ///
    /// Points in the gap after a cell belong to that cell. Points outside
    /// the grid, including slots past the last week of a partial row, yield
    /// `None`.
    #[must_use]
    pub fn cell_at_point(&self, pt: Point) -> Option<Cell> {
        let cell = Cell::new(self.metrics.index_at(pt.x)?, self.metrics.index_at(pt.y)?);
        self.week_of(cell).map(|_| cell)
    }

    /// Week under a world-space point.
    #[must_use]
    pub fn week_at_point(&self, pt: Point) -> Option<u32> {
        self.cell_at_point(pt).and_then(|cell| self.week_of(cell))
    }

    /// Iterates every week in order together with its cell.
    pub fn cells(&self) -> impl Iterator<Item = (u32, Cell)> + '_ {
        (0..self.total_weeks).map(|week| (week, Cell::new(week % self.cols, week / self.cols)))
    }
}
