// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::op::{DrawOp, DrawOpKind, TextAlign, TextBaseline, TextOp};
use crate::surface::DrawSurface;

/// An immutable, ordered list of drawing primitives for one frame.
///
/// Plans are cheap to clone and carry no reference to a live canvas; a
/// [`DrawSurface`] executes them via [`DrawPlan::replay`].
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawPlan {
    ops: Arc<[DrawOp]>,
}

impl DrawPlan {
    /// A plan that draws nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the primitives in draw order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the plan draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterates the primitives in draw order.
    pub fn iter(&self) -> core::slice::Iter<'_, DrawOp> {
        self.ops.iter()
    }

    /// Number of primitives of the given kind.
    #[must_use]
    pub fn count(&self, kind: DrawOpKind) -> usize {
        self.ops.iter().filter(|op| op.kind() == kind).count()
    }

    /// Iterates the text labels in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextOp> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Starts a new frame on `surface` and replays this plan into it.
    pub fn present<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.begin_frame();
        self.replay(surface);
    }

    /// Sends every primitive to `surface` in order.
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for op in self.ops.iter() {
            surface.draw(op);
        }
    }
}

impl<'a> IntoIterator for &'a DrawPlan {
    type Item = &'a DrawOp;
    type IntoIter = core::slice::Iter<'a, DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl From<Vec<DrawOp>> for DrawPlan {
    fn from(ops: Vec<DrawOp>) -> Self {
        Self { ops: ops.into() }
    }
}

/// Appends primitives and freezes them into a [`DrawPlan`].
#[derive(Clone, Debug, Default)]
pub struct PlanBuilder {
    ops: Vec<DrawOp>,
}

impl PlanBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `capacity` primitives.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: Vec::with_capacity(capacity),
        }
    }

    /// Appends a raw primitive.
    pub fn push(&mut self, op: DrawOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    /// Appends a rectangle fill.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> &mut Self {
        self.push(DrawOp::FillRect { rect, color })
    }

    /// Appends a circle outline.
    pub fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
        line_width: f64,
    ) -> &mut Self {
        self.push(DrawOp::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        })
    }

    /// Appends a line segment.
    pub fn line(&mut self, from: Point, to: Point, color: Color, line_width: f64) -> &mut Self {
        self.push(DrawOp::Line {
            from,
            to,
            color,
            line_width,
        })
    }

    /// Appends an unrotated text label.
    pub fn text(
        &mut self,
        origin: Point,
        content: impl Into<String>,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
        font: &str,
    ) -> &mut Self {
        self.push(DrawOp::Text(TextOp {
            origin,
            content: content.into(),
            align,
            baseline,
            color,
            font: font.into(),
            rotation: 0.0,
        }))
    }

    /// Number of primitives appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if nothing was appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Freezes the primitives into an immutable plan.
    #[must_use]
    pub fn finish(self) -> DrawPlan {
        DrawPlan::from(self.ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let mut b = PlanBuilder::new();
        b.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK)
            .line(Point::ZERO, Point::new(1.0, 1.0), Color::WHITE, 1.0)
            .stroke_circle(Point::new(5.0, 5.0), 6.0, Color::BLACK, 2.0)
            .text(
                Point::new(3.0, 3.0),
                "Age",
                TextAlign::Center,
                TextBaseline::Top,
                Color::BLACK,
                "12px Arial",
            );
        assert_eq!(b.len(), 4);
        let plan = b.finish();
        let kinds: Vec<DrawOpKind> = plan.iter().map(DrawOp::kind).collect();
        assert_eq!(
            kinds,
            [
                DrawOpKind::FillRect,
                DrawOpKind::Line,
                DrawOpKind::StrokeCircle,
                DrawOpKind::Text,
            ]
        );
        assert_eq!(plan.count(DrawOpKind::Text), 1);
        assert_eq!(plan.texts().next().map(|t| t.content.as_str()), Some("Age"));
    }

    #[test]
    fn clones_share_storage() {
        let mut b = PlanBuilder::with_capacity(1);
        b.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        let plan = b.finish();
        let copy = plan.clone();
        assert!(core::ptr::eq(plan.ops().as_ptr(), copy.ops().as_ptr()));
        assert_eq!(plan, copy);
    }

    #[test]
    fn empty_plan() {
        let plan = DrawPlan::empty();
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
        assert!(PlanBuilder::new().finish().is_empty());
    }
}
