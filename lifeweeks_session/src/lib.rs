// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifeweeks Session: the interactive shell around the renderer.
//!
//! A [`LifeGridSession`] holds what a form collects (birth date, life
//! expectancy, events) plus the pan/zoom state, turns client-space
//! [`InputEvent`]s into view changes, and re-renders only when something
//! changed:
//!
//! ```
//! use chrono::NaiveDate;
//! use kurbo::Point;
//! use lifeweeks_session::{InputEvent, LifeGridSession, SessionConfig};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut session = LifeGridSession::new(SessionConfig::default(), today);
//! session.set_birth_date(NaiveDate::from_ymd_opt(1990, 1, 1));
//!
//! let first = session.frame().expect("a new session is dirty");
//! assert!(session.frame().is_none());
//!
//! session.handle(&InputEvent::Wheel { client: Point::new(300.0, 200.0), delta_y: -1.0 });
//! let zoomed = session.frame().expect("zoom changes the view");
//! assert_ne!(first, zoomed);
//! ```
//!
//! The window-level pointer-up listener is scoped with [`MountedSession`];
//! see [`LifeGridSession::mount`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod input;
mod session;

pub use host::{MountedSession, PointerUpHost};
pub use input::InputEvent;
pub use session::{DEFAULT_LIFE_EXPECTANCY_YEARS, LifeGridSession, SessionConfig};
