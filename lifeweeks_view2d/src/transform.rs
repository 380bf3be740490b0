// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Smallest zoom factor reachable through wheel input by default.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;
/// Largest zoom factor reachable through wheel input by default.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;
/// Lower bound for any configured minimum zoom.
///
/// Zoom must stay positive for the view to be invertible.
pub const ZOOM_FLOOR: f64 = 1e-6;

/// Inclusive bounds for the zoom factor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLimits {
    /// Minimum zoom factor.
    pub min: f64,
    /// Maximum zoom factor.
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ZoomLimits {
    /// Creates limits, swapping the bounds if they are given in reverse.
    ///
    /// Both bounds are raised to at least [`ZOOM_FLOOR`].
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let min = min.max(ZOOM_FLOOR);
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Clamps `zoom` into the limits.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }
}

/// One discrete wheel zoom step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZoomStep {
    /// Scroll up: zoom in by 10%.
    In,
    /// Scroll down: zoom out by 10%.
    Out,
}

impl ZoomStep {
    /// Interprets a wheel `delta_y`: negative scrolls up, positive scrolls down.
    ///
    /// A zero delta carries no direction and yields `None`.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    /// Multiplicative zoom factor for this step.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::In => 1.1,
            Self::Out => 0.9,
        }
    }
}

/// Pan/zoom state: `screen = anchor + offset + zoom * world`.
///
/// The anchor is a fixed layout origin owned by the viewport, so the transform
/// itself only carries the two user-controlled parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewTransform {
    /// Uniform scale from world to screen units.
    pub zoom: f64,
    /// Screen-space translation applied after the anchor.
    pub offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// Zoom `1`, no offset.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        offset: Vec2::ZERO,
    };

    /// Creates a transform from a zoom factor and offset.
    #[must_use]
    pub const fn new(zoom: f64, offset: Vec2) -> Self {
        Self { zoom, offset }
    }

    /// Returns `true` for the reset state.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// World to screen affine for the given anchor.
    #[must_use]
    pub fn to_affine(&self, anchor: Vec2) -> Affine {
        Affine::translate(anchor + self.offset) * Affine::scale(self.zoom)
    }

    /// Maps a world-space point to screen space.
    #[must_use]
    pub fn world_to_screen(&self, anchor: Vec2, world: Point) -> Point {
        (anchor + self.offset + world.to_vec2() * self.zoom).to_point()
    }

    /// Maps a screen-space point back to world space.
    #[must_use]
    pub fn screen_to_world(&self, anchor: Vec2, screen: Point) -> Point {
        ((screen.to_vec2() - anchor - self.offset) / self.zoom).to_point()
    }

    /// Returns the transform after zooming by `factor` about `cursor`.
    ///
    /// The world point under `cursor` maps back to `cursor` under the new
    /// zoom. When clamping leaves the zoom unchanged, `self` is returned so
    /// the view does not drift at the limits.
    #[must_use]
    pub fn zoomed_about(&self, anchor: Vec2, cursor: Point, factor: f64, limits: ZoomLimits) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return *self;
        }
        let zoom = limits.clamp(self.zoom * factor);
        if (zoom - self.zoom).abs() < f64::EPSILON {
            return *self;
        }
        let world = self.screen_to_world(anchor, cursor);
        Self {
            zoom,
            offset: cursor.to_vec2() - anchor - world.to_vec2() * zoom,
        }
    }
}
