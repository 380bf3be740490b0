// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Rect};
use peniko::Color;

/// Horizontal placement of text relative to its origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    /// Text starts at the origin.
    #[default]
    Left,
    /// Text is centered on the origin.
    Center,
    /// Text ends at the origin.
    Right,
}

/// Vertical placement of text relative to its origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextBaseline {
    /// Origin is the top of the em box.
    Top,
    /// Origin is the middle of the em box.
    Middle,
    /// Origin is the alphabetic baseline.
    #[default]
    Alphabetic,
    /// Origin is the bottom of the em box.
    Bottom,
}

/// A text label.
///
/// Text is never scaled with the grid; only its origin moves with the view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextOp {
    /// Anchor point in screen space.
    pub origin: Point,
    /// Text to draw.
    pub content: String,
    /// Horizontal alignment about `origin`.
    pub align: TextAlign,
    /// Vertical alignment about `origin`.
    pub baseline: TextBaseline,
    /// Fill color.
    pub color: Color,
    /// CSS-style font shorthand, for example `12px Arial`.
    pub font: String,
    /// Clockwise rotation about `origin`, in radians.
    pub rotation: f64,
}

/// One drawing primitive in screen space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Stroke a circle outline.
    StrokeCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        line_width: f64,
    },
    /// Stroke a straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        line_width: f64,
    },
    /// Draw a text label.
    Text(TextOp),
}

impl DrawOp {
    /// Short name of the primitive, handy for logs and summaries.
    #[must_use]
    pub fn kind(&self) -> DrawOpKind {
        match self {
            Self::FillRect { .. } => DrawOpKind::FillRect,
            Self::StrokeCircle { .. } => DrawOpKind::StrokeCircle,
            Self::Line { .. } => DrawOpKind::Line,
            Self::Text(_) => DrawOpKind::Text,
        }
    }
}

/// Discriminant of a [`DrawOp`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DrawOpKind {
    /// [`DrawOp::FillRect`].
    FillRect,
    /// [`DrawOp::StrokeCircle`].
    StrokeCircle,
    /// [`DrawOp::Line`].
    Line,
    /// [`DrawOp::Text`].
    Text,
}
