// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifeweeks Render: one pure function from chart state to a draw plan.
//!
//! [`render`] takes a [`FrameInput`] (lifespan, today's date, events, the
//! current [`ViewTransform`](lifeweeks_view2d::ViewTransform), the grid
//! layout, the canvas size, and a [`GridStyle`]) and returns a
//! [`DrawPlan`](lifeweeks_plan::DrawPlan) whose coordinates are all in
//! screen space. Nothing is cached between frames; callers decide when a
//! frame is stale.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kurbo::Size;
//! use lifeweeks_grid::{GridLayout, LifeSpan};
//! use lifeweeks_overlay::EventList;
//! use lifeweeks_plan::DrawOpKind;
//! use lifeweeks_render::{FrameInput, GridStyle, render};
//! use lifeweeks_view2d::ViewTransform;
//!
//! let span = LifeSpan::new(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(), 80);
//! let events = EventList::new();
//! let style = GridStyle::default();
//! let plan = render(&FrameInput {
//!     span: &span,
//!     today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     events: &events,
//!     transform: ViewTransform::IDENTITY,
//!     layout: GridLayout::Calendar,
//!     canvas: Size::new(800.0, 1100.0),
//!     style: &style,
//! });
//! assert_eq!(plan.count(DrawOpKind::FillRect), 80 * 52);
//! ```
//!
//! With the `tracing` feature each call to [`render`] runs inside a
//! `debug` span.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod frame;
mod style;

pub use frame::{FrameInput, cell_fill, render, week_at_screen_point};
pub use style::GridStyle;
