// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// A cell position in grid column/row units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Zero-based column.
    pub col: u32,
    /// Zero-based row.
    pub row: u32,
}

impl Cell {
    /// Creates a cell at `(col, row)`.
    #[inline]
    #[must_use]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Pixel size of one cell and the gap that follows it.
///
/// All positions produced here are in **world space**, before any pan/zoom
/// transform is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellMetrics {
    /// Edge length of a cell square.
    pub size: f64,
    /// Gap between neighboring cells.
    pub margin: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            size: 10.0,
            margin: 2.0,
        }
    }
}

impl CellMetrics {
    /// Creates metrics with the given cell size and margin.
    #[inline]
    #[must_use]
    pub const fn new(size: f64, margin: f64) -> Self {
        Self { size, margin }
    }

    /// Distance between the origins of two neighboring cells.
    #[inline]
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.size + self.margin
    }

    /// Top-left corner of `cell`.
    #[must_use]
    pub fn pixel_of(&self, cell: Cell) -> Point {
        let pitch = self.pitch();
        Point::new(f64::from(cell.col) * pitch, f64::from(cell.row) * pitch)
    }

    /// Filled area of `cell`, excluding the trailing margin.
    #[must_use]
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::from_origin_size(self.pixel_of(cell), Size::new(self.size, self.size))
    }

    /// Center of `cell`.
    #[must_use]
    pub fn cell_center(&self, cell: Cell) -> Point {
        let half = self.size / 2.0;
        self.pixel_of(cell) + Vec2::new(half, half)
    }

    /// Pixel length covered by `count` cells laid out in a line.
    ///
    /// The trailing margin after the last cell is not included.
    #[must_use]
    pub fn span(&self, count: u32) -> f64 {
        if count == 0 {
            return 0.0;
        }
        f64::from(count) * self.pitch() - self.margin
    }

    /// Index of the cell slot containing `coord` along one axis.
    ///
    /// A slot is a cell plus its trailing margin, so points in the gap resolve
    /// to the preceding cell. Negative and non-finite coordinates yield `None`.
    #[must_use]
    pub fn index_at(&self, coord: f64) -> Option<u32> {
        let pitch = self.pitch();
        if coord.is_nan() || coord < 0.0 || pitch.is_nan() || pitch <= 0.0 {
            return None;
        }
        let slot = coord / pitch;
        if !slot.is_finite() || slot >= f64::from(u32::MAX) {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "slot is finite, non-negative and below u32::MAX; truncation is floor"
        )]
        let index = slot as u32;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_of_uses_pitch() {
        let m = CellMetrics::default();
        assert_eq!(m.pixel_of(Cell::new(0, 0)), Point::ZERO);
        assert_eq!(m.pixel_of(Cell::new(3, 2)), Point::new(36.0, 24.0));
    }

    #[test]
    fn cell_rect_and_center() {
        let m = CellMetrics::default();
        let rect = m.cell_rect(Cell::new(1, 1));
        assert_eq!(rect, Rect::new(12.0, 12.0, 22.0, 22.0));
        assert_eq!(m.cell_center(Cell::new(1, 1)), Point::new(17.0, 17.0));
    }

    #[test]
    fn span_drops_trailing_margin() {
        let m = CellMetrics::default();
        assert_eq!(m.span(0), 0.0);
        assert_eq!(m.span(1), 10.0);
        assert_eq!(m.span(52), 622.0);
    }

    #[test]
    fn index_at_resolves_gap_to_preceding_cell() {
        let m = CellMetrics::default();
        assert_eq!(m.index_at(0.0), Some(0));
        assert_eq!(m.index_at(9.9), Some(0));
        // Inside the 2px gap after cell 0.
        assert_eq!(m.index_at(11.0), Some(0));
        assert_eq!(m.index_at(12.0), Some(1));
        assert_eq!(m.index_at(-0.5), None);
        assert_eq!(m.index_at(f64::NAN), None);
        assert_eq!(m.index_at(f64::INFINITY), None);
    }
}
