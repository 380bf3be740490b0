// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and wheel handling on top of a [`Viewport`].
//!
//! ## Usage
//!
//! 1) Call [`PanZoomController::pointer_down`] when a button is pressed over the canvas.
//! 2) Forward every pointer move to [`PanZoomController::pointer_move`].
//! 3) Call [`PanZoomController::pointer_up`] from a window-level listener, and
//!    [`PanZoomController::pointer_leave`] when the pointer leaves the canvas.
//! 4) Forward wheel input to [`PanZoomController::wheel`].
//!
//! Each method returns `true` when the transform changed and a redraw is due.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use lifeweeks_view2d::{PanZoomController, Viewport};
//!
//! let viewport = Viewport::new(Vec2::new(40.0, 40.0));
//! let mut ctl = PanZoomController::new(viewport);
//!
//! ctl.pointer_down(Point::new(100.0, 100.0));
//! assert!(ctl.pointer_move(Point::new(130.0, 90.0)));
//! ctl.pointer_up();
//! assert_eq!(ctl.viewport().offset(), Vec2::new(30.0, -10.0));
//!
//! // Scrolling up zooms in around the cursor.
//! assert!(ctl.wheel(Point::new(400.0, 300.0), -1.0));
//! assert!(ctl.viewport().zoom() > 1.0);
//! ```

use kurbo::Point;

use crate::modes::InteractionMode;
use crate::transform::{ViewTransform, ZoomStep};
use crate::viewport::Viewport;

/// Interactive pan/zoom state machine.
///
/// Owns the [`Viewport`] whose transform persists between frames; nothing else
/// in a frame carries state.
#[derive(Clone, Debug)]
pub struct PanZoomController {
    viewport: Viewport,
    mode: InteractionMode,
}

impl PanZoomController {
    /// Wraps `viewport` in an idle controller.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            mode: InteractionMode::Idle,
        }
    }

    /// Returns the underlying viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the underlying viewport mutably.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.viewport.transform()
    }

    /// Returns the current interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Starts a drag at `pointer`.
    ///
    /// Pressing again while already dragging re-captures the grab point.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.mode = InteractionMode::begin_drag(pointer, self.viewport.offset());
        #[cfg(feature = "tracing")]
        tracing::trace!(x = pointer.x, y = pointer.y, "drag started");
    }

    /// Moves the grid with the pointer while dragging.
    ///
    /// Returns `true` if the offset changed. Moves while idle are ignored.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(offset) = self.mode.drag_offset(pointer) else {
            return false;
        };
        if offset == self.viewport.offset() {
            return false;
        }
        self.viewport.set_offset(offset);
        true
    }

    /// Ends a drag. Returns `true` if a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.mode.is_dragging();
        self.mode = InteractionMode::Idle;
        #[cfg(feature = "tracing")]
        if was_dragging {
            tracing::trace!("drag ended");
        }
        was_dragging
    }

    /// Ends a drag when the pointer leaves the canvas.
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up()
    }

    /// Applies one wheel step at `cursor` (view coordinates).
    ///
    /// Negative `delta_y` zooms in by 10%, positive zooms out by 10%, zero is
    /// ignored. Zoom is clamped silently. Returns `true` if the transform changed.
    pub fn wheel(&mut self, cursor: Point, delta_y: f64) -> bool {
        let Some(step) = ZoomStep::from_wheel_delta(delta_y) else {
            return false;
        };
        let before = self.viewport.offset();
        let changed = self.viewport.zoom_about_view_point(cursor, step.factor());
        if changed {
            self.mode.shift_grab(self.viewport.offset() - before);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            ?step,
            changed,
            zoom = self.viewport.zoom(),
            "wheel zoom"
        );
        changed
    }

    /// Restores zoom `1` and zero offset. Returns `true` if anything changed.
    ///
    /// A drag in progress continues from the reset offset.
    pub fn reset(&mut self) -> bool {
        let before = self.viewport.offset();
        let changed = self.viewport.reset();
        if changed {
            self.mode.shift_grab(self.viewport.offset() - before);
        }
        changed
    }
}
