// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Pointer interaction mode of a [`crate::PanZoomController`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum InteractionMode {
    /// No button held; wheel input zooms, pointer moves are ignored.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Pointer position minus the offset at pointer-down.
        ///
        /// While dragging, `offset = pointer - grab`, so the grid follows the
        /// pointer without accumulating per-move rounding.
        grab: Vec2,
    },
}

impl InteractionMode {
    /// Enters the dragging mode for a press at `pointer` with the current `offset`.
    #[must_use]
    pub fn begin_drag(pointer: Point, offset: Vec2) -> Self {
        Self::Dragging {
            grab: pointer.to_vec2() - offset,
        }
    }

    /// Offset implied by `pointer` while dragging, or `None` when idle.
    #[must_use]
    pub fn drag_offset(&self, pointer: Point) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { grab } => Some(pointer.to_vec2() - *grab),
        }
    }

    /// Keeps an active drag consistent after the offset moved by `delta`
    /// outside of the drag itself, for example a wheel zoom mid-drag.
    pub fn shift_grab(&mut self, delta: Vec2) {
        if let Self::Dragging { grab } = self {
            *grab -= delta;
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
