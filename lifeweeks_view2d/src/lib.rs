// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifeweeks View 2D: pan/zoom state for the week grid.
//!
//! This crate provides a small, headless model of the view over a world-space
//! week grid, with view extents expressed in canvas pixels. It focuses on:
//! - Pan + zoom state ([`ViewTransform`]) and its limits ([`ZoomLimits`]).
//! - Coordinate conversion between world and view space ([`Viewport`]).
//! - Zooming about the cursor so the point under it stays fixed.
//! - Pointer drag and wheel handling ([`PanZoomController`]).
//!
//! It does **not** own the grid or any rendering backend.
//!
//! ## Anchor convention
//!
//! The mapping is `screen = anchor + offset + zoom * world`, where `anchor`
//! is the fixed top-left label margin. The same anchor is used for the zoom
//! math and by the renderer; mixing conventions would make the grid jump
//! under the cursor.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use lifeweeks_view2d::Viewport;
//!
//! let mut view = Viewport::new(Vec2::new(40.0, 40.0));
//!
//! let cursor = Point::new(300.0, 200.0);
//! let before = view.view_to_world_point(cursor);
//! view.zoom_about_view_point(cursor, 1.1);
//! let after = view.view_to_world_point(cursor);
//! assert!((after - before).hypot() < 1e-9);
//!
//! view.reset();
//! assert_eq!(view.zoom(), 1.0);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and clamped to `[0.1, 10]` by default; requests past
//!   the limits are clipped without error.
//! - Rotation is left out.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
pub mod pan_zoom;
mod transform;
mod viewport;

pub use modes::InteractionMode;
pub use pan_zoom::PanZoomController;
pub use transform::{
    DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, ViewTransform, ZOOM_FLOOR, ZoomLimits, ZoomStep,
};
pub use viewport::Viewport;
