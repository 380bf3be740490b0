// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifeweeks Plan: the draw plan a frame renders into.
//!
//! A [`DrawPlan`] is a plain, immutable list of screen-space primitives:
//! rectangle fills, circle outlines, line segments, and text labels (see
//! [`DrawOp`]). Plans are produced from scratch every frame and have no
//! dependency on a live canvas, so they can be compared in tests, logged, or
//! serialized with the `serde` feature.
//!
//! A [`DrawSurface`] executes a plan. Real canvases live outside this
//! workspace; [`RecordingSurface`] keeps the primitives for inspection.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use lifeweeks_plan::{DrawOpKind, DrawSurface, PlanBuilder, RecordingSurface};
//! use peniko::Color;
//!
//! let mut builder = PlanBuilder::new();
//! builder
//!     .fill_rect(Rect::new(40.0, 40.0, 50.0, 50.0), Color::from_rgb8(0x3b, 0x82, 0xf6))
//!     .stroke_circle(Point::new(45.0, 45.0), 6.0, Color::BLACK, 2.0);
//! let plan = builder.finish();
//!
//! let mut surface = RecordingSurface::new();
//! plan.present(&mut surface);
//! assert_eq!(surface.count(DrawOpKind::StrokeCircle), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod op;
mod plan;
mod surface;

pub use op::{DrawOp, DrawOpKind, TextAlign, TextBaseline, TextOp};
pub use plan::{DrawPlan, PlanBuilder};
pub use surface::{DrawSurface, RecordingSurface};
