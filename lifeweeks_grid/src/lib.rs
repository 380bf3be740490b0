// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifeweeks Grid: geometry for a "life in weeks" chart.
//!
//! A lifespan of `N` years is drawn as `N * 52` square cells, one per week.
//! This crate owns the pure mapping between week indices, grid cells, and
//! world-space pixels:
//!
//! - [`LifeSpan`] and [`week_at`]: dates to week indices.
//! - [`GridLayout`]: how weeks are arranged. [`GridLayout::Calendar`] uses
//!   one row per year; [`GridLayout::Packed`] packs weeks into a near-square
//!   block.
//! - [`GridGeometry`]: week to [`Cell`], cell to pixel, the grid extent, and
//!   the inverse pixel to week lookup used for hit testing.
//!
//! Everything here is in **world space**. Pan and zoom are applied later by
//! a viewport; see `lifeweeks_view2d`.
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kurbo::Vec2;
//! use lifeweeks_grid::{Cell, CellMetrics, GridGeometry, GridLayout, LifeSpan};
//!
//! let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
//! let span = LifeSpan::new(birth, 80);
//! let grid = GridGeometry::for_lifespan(&span, GridLayout::Calendar, CellMetrics::default());
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let lived = span.weeks_lived(today);
//! assert_eq!(lived, 1774);
//!
//! let cell = grid.cell_of(lived).unwrap();
//! assert_eq!(cell, Cell::new(6, 34));
//!
//! let corner = grid.metrics().pixel_of(cell);
//! assert_eq!(grid.week_at_point(corner + Vec2::new(1.0, 1.0)), Some(lived));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod layout;
mod metrics;
mod span;

pub use layout::{GridGeometry, GridLayout, WEEKS_PER_YEAR};
pub use metrics::{Cell, CellMetrics};
pub use span::{DAYS_PER_WEEK, LifeSpan, MAX_LIFE_EXPECTANCY_YEARS, week_at};
