// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Pointer and wheel input in client coordinates.
///
/// Client coordinates are relative to the window or page. The session
/// subtracts the canvas origin before handing them to the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Wheel scroll. Negative `delta_y` zooms in.
    Wheel {
        /// Cursor position.
        client: Point,
        /// Vertical scroll amount.
        delta_y: f64,
    },
    /// A button went down over the canvas.
    PointerDown {
        /// Pointer position.
        client: Point,
    },
    /// The pointer moved over the canvas.
    PointerMove {
        /// Pointer position.
        client: Point,
    },
    /// A button was released anywhere in the window.
    PointerUp,
    /// The pointer left the canvas.
    PointerLeave,
}
