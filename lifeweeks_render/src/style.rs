// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Vec2;
use lifeweeks_grid::CellMetrics;
use lifeweeks_overlay::{OverlayConfig, ParseEventError, parse_css_color};
use peniko::Color;

/// Visual configuration for a rendered frame.
///
/// The defaults reproduce the classic look: 10 px cells with a 2 px gap, a
/// 40 px label margin, blue lived weeks, and light gray weeks to come.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridStyle {
    /// Cell size and gap, in world pixels.
    pub metrics: CellMetrics,
    /// Width of the axis label band along the top and left edges.
    ///
    /// This is also the viewport anchor: world `(0, 0)` lands at
    /// `(label_margin, label_margin)` at identity zoom.
    pub label_margin: f64,
    /// Event label column spacing.
    pub overlay: OverlayConfig,
    /// Fill of weeks already lived.
    pub lived_color: Color,
    /// Fill of weeks not yet lived.
    pub unlived_color: Color,
    /// Axis tick and title color.
    pub text_color: Color,
    /// Font shorthand for every label.
    pub font: String,
    /// Stroke width of point-event rings at zoom `1`; scales with zoom.
    pub ring_line_width: f64,
    /// Stroke width of event connectors.
    pub connector_line_width: f64,
    /// A tick label is drawn every this many rows and columns.
    pub tick_step: u32,
    /// Gap between the vertical tick labels and the grid's left edge.
    pub row_tick_inset: f64,
    /// Height of the horizontal tick labels above the grid's top edge.
    pub column_tick_rise: f64,
    /// Distance of both axis titles from the canvas edge.
    pub title_inset: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            metrics: CellMetrics::default(),
            label_margin: 40.0,
            overlay: OverlayConfig::default(),
            lived_color: Color::from_rgb8(0x3b, 0x82, 0xf6),
            unlived_color: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            text_color: Color::BLACK,
            font: String::from("12px Arial"),
            ring_line_width: 2.0,
            connector_line_width: 1.0,
            tick_step: 5,
            row_tick_inset: 5.0,
            column_tick_rise: 15.0,
            title_inset: 10.0,
        }
    }
}

impl GridStyle {
    /// Viewport anchor implied by the label margin.
    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.label_margin, self.label_margin)
    }

    /// Replaces the lived and unlived fills with CSS color strings.
    ///
    /// On error the style is left unchanged.
    pub fn with_colors(mut self, lived: &str, unlived: &str) -> Result<Self, ParseEventError> {
        let lived = parse_css_color(lived)?;
        let unlived = parse_css_color(unlived)?;
        self.lived_color = lived;
        self.unlived_color = unlived;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_anchor_is_label_margin() {
        assert_eq!(GridStyle::default().anchor(), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn hex_colors_replace_fills() {
        let style = GridStyle::default().with_colors("#000000", "#ffffff").unwrap();
        let lived = style.lived_color.to_rgba8();
        let unlived = style.unlived_color.to_rgba8();
        assert_eq!((lived.r, lived.g, lived.b), (0, 0, 0));
        assert_eq!((unlived.r, unlived.g, unlived.b), (255, 255, 255));
        assert!(GridStyle::default().with_colors("#000000", "nope").is_err());
    }
}
