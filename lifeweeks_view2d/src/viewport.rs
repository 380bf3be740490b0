// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::transform::{ViewTransform, ZoomLimits};

/// Margin-anchored 2D viewport over the week grid.
///
/// `Viewport` tracks a fixed layout anchor (the top-left label margin) and
/// the user-controlled [`ViewTransform`]. World space is the grid's own
/// coordinate system; view space is canvas pixels.
///
/// The same anchor is used for converting points, for zooming, and by the
/// renderer, so the point under the cursor stays put during a zoom step.
#[derive(Clone, Debug)]
pub struct Viewport {
    anchor: Vec2,
    transform: ViewTransform,
    limits: ZoomLimits,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport {
    /// Creates a viewport with the grid origin at `anchor`.
    ///
    /// Initial zoom is `1.0` with no offset, and zoom is limited to
    /// `[0.1, 10]`.
    #[must_use]
    pub fn new(anchor: Vec2) -> Self {
        let mut vp = Self {
            anchor,
            transform: ViewTransform::IDENTITY,
            limits: ZoomLimits::default(),
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the layout anchor.
    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Returns the current pan/zoom state.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Replaces the pan/zoom state; zoom is clamped into the limits.
    pub fn set_transform(&mut self, transform: ViewTransform) {
        let transform = ViewTransform {
            zoom: self.limits.clamp(transform.zoom),
            ..transform
        };
        if self.transform == transform {
            return;
        }
        self.transform = transform;
        self.rebuild_transforms();
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.transform.offset
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Sets the zoom limits and clamps the current zoom into them.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.limits = ZoomLimits::new(limits.min, limits.max);
        self.set_zoom(self.transform.zoom);
    }

    /// Sets the zoom factor without moving the offset, clamped into the limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        let clamped = self.limits.clamp(zoom);
        if (self.transform.zoom - clamped).abs() < f64::EPSILON {
            return;
        }
        self.transform.zoom = clamped;
        self.rebuild_transforms();
    }

    /// Sets the offset directly.
    pub fn set_offset(&mut self, offset: Vec2) {
        if self.transform.offset == offset {
            return;
        }
        self.transform.offset = offset;
        self.rebuild_transforms();
    }

    /// Zooms by `factor` around a point in view coordinates.
    ///
    /// The world point under `cursor` stays under `cursor`. Returns `true` if
    /// the transform changed; a step that is fully absorbed by the zoom
    /// limits leaves the view untouched.
    pub fn zoom_about_view_point(&mut self, cursor: Point, factor: f64) -> bool {
        let next = self
            .transform
            .zoomed_about(self.anchor, cursor, factor, self.limits);
        if next == self.transform {
            return false;
        }
        self.transform = next;
        self.rebuild_transforms();
        true
    }

    /// Restores zoom `1` and zero offset. Returns `true` if anything changed.
    pub fn reset(&mut self) -> bool {
        if self.transform.is_identity() {
            return false;
        }
        self.transform = ViewTransform::IDENTITY;
        self.rebuild_transforms();
        true
    }

    /// Converts a world-space point into view coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    fn rebuild_transforms(&mut self) {
        self.world_to_view = self.transform.to_affine(self.anchor);
        self.view_to_world = self.world_to_view.inverse();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::Viewport;
    use crate::transform::{ViewTransform, ZoomLimits};

    const ANCHOR: Vec2 = Vec2::new(40.0, 40.0);

    #[test]
    fn basic_world_view_roundtrip() {
        let vp = Viewport::new(ANCHOR);

        let world_pt = Point::new(10.0, -5.0);
        let view_pt = vp.world_to_view_point(world_pt);
        assert_eq!(view_pt, Point::new(50.0, 35.0));
        let world_back = vp.view_to_world_point(view_pt);
        assert!((world_back.x - world_pt.x).abs() < 1e-9);
        assert!((world_back.y - world_pt.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut vp = Viewport::new(ANCHOR);
        vp.set_offset(Vec2::new(-25.0, 60.0));

        let cursor = Point::new(300.0, 410.0);
        let world_at_cursor_before = vp.view_to_world_point(cursor);

        assert!(vp.zoom_about_view_point(cursor, 2.0));
        let world_at_cursor_after = vp.view_to_world_point(cursor);

        assert!((world_at_cursor_after.x - world_at_cursor_before.x).abs() < 1e-9);
        assert!((world_at_cursor_after.y - world_at_cursor_before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let mut vp = Viewport::new(ANCHOR);
        for _ in 0..100 {
            vp.zoom_about_view_point(Point::new(100.0, 100.0), 1.1);
        }
        assert_eq!(vp.zoom(), 10.0);
        assert!(!vp.zoom_about_view_point(Point::new(100.0, 100.0), 1.1));

        for _ in 0..200 {
            vp.zoom_about_view_point(Point::new(100.0, 100.0), 0.9);
        }
        assert!((vp.zoom() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn set_transform_clamps_zoom() {
        let mut vp = Viewport::new(ANCHOR);
        vp.set_transform(ViewTransform::new(55.0, Vec2::new(1.0, 2.0)));
        assert_eq!(vp.zoom(), 10.0);
        assert_eq!(vp.offset(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn reset_restores_identity_and_is_idempotent() {
        let mut vp = Viewport::new(ANCHOR);
        assert!(!vp.reset());

        vp.set_offset(Vec2::new(30.0, -12.0));
        vp.zoom_about_view_point(Point::new(200.0, 200.0), 1.1);
        assert!(vp.reset());
        assert_eq!(vp.transform(), ViewTransform::IDENTITY);
        assert!(!vp.reset());
        assert_eq!(vp.transform(), ViewTransform::IDENTITY);
    }

    #[test]
    fn setting_limits_clamps_current_zoom() {
        let mut vp = Viewport::new(ANCHOR);
        vp.set_zoom(8.0);
        vp.set_zoom_limits(ZoomLimits::new(4.0, 0.5));
        assert_eq!(vp.zoom(), 4.0);
        assert_eq!(vp.zoom_limits(), ZoomLimits { min: 0.5, max: 4.0 });
    }

    #[test]
    fn zero_min_zoom_keeps_the_view_invertible() {
        let mut vp = Viewport::new(ANCHOR);
        vp.set_zoom_limits(ZoomLimits { min: 0.0, max: 10.0 });
        let cursor = Point::new(400.0, 300.0);
        for _ in 0..10_000 {
            vp.zoom_about_view_point(cursor, 0.9);
        }
        assert!(vp.zoom() > 0.0);
        let world = vp.view_to_world_point(cursor);
        assert!(world.x.is_finite() && world.y.is_finite());
        assert!(vp.offset().x.is_finite() && vp.offset().y.is_finite());
    }
}
