// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the demos.
//!
//! [`SvgSurface`] is a [`DrawSurface`] that turns draw plans into an SVG
//! document. It is meant for looking at frames without a browser canvas,
//! not for pixel-exact output.

use std::fmt::Write as _;

use lifeweeks_plan::{DrawOp, DrawSurface, TextAlign, TextBaseline, TextOp};
use peniko::Color;

/// A surface that writes each primitive as an SVG element.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    body: String,
    elements: usize,
}

impl SvgSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements written since the last frame started.
    pub fn elements(&self) -> usize {
        self.elements
    }

    /// Wraps the current frame in an `<svg>` document of the given size.
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn write_text(&mut self, text: &TextOp) {
        let (fill, opacity) = color_to_svg(text.color);
        let anchor = match text.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let baseline = match text.baseline {
            TextBaseline::Top => "text-before-edge",
            TextBaseline::Middle => "central",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Bottom => "text-after-edge",
        };
        let (x, y) = (fmt_f64(text.origin.x), fmt_f64(text.origin.y));
        let _ = write!(
            self.body,
            r#"<text x="{x}" y="{y}" fill="{fill}" fill-opacity="{opacity}" text-anchor="{anchor}" dominant-baseline="{baseline}" style="font: {}""#,
            escape(&text.font),
        );
        if text.rotation != 0.0 {
            let degrees = text.rotation.to_degrees();
            let _ = write!(self.body, r#" transform="rotate({} {x} {y})""#, fmt_f64(degrees));
        }
        let _ = writeln!(self.body, ">{}</text>", escape(&text.content));
    }
}

impl DrawSurface for SvgSurface {
    fn begin_frame(&mut self) {
        self.body.clear();
        self.elements = 0;
    }

    fn draw(&mut self, op: &DrawOp) {
        self.elements += 1;
        match op {
            DrawOp::FillRect { rect, color } => {
                let (fill, opacity) = color_to_svg(*color);
                let _ = writeln!(
                    self.body,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}" fill-opacity="{opacity}"/>"#,
                    fmt_f64(rect.x0),
                    fmt_f64(rect.y0),
                    fmt_f64(rect.width()),
                    fmt_f64(rect.height()),
                );
            }
            DrawOp::StrokeCircle {
                center,
                radius,
                color,
                line_width,
            } => {
                let (stroke, opacity) = color_to_svg(*color);
                let _ = writeln!(
                    self.body,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{stroke}" stroke-opacity="{opacity}" stroke-width="{}"/>"#,
                    fmt_f64(center.x),
                    fmt_f64(center.y),
                    fmt_f64(*radius),
                    fmt_f64(*line_width),
                );
            }
            DrawOp::Line {
                from,
                to,
                color,
                line_width,
            } => {
                let (stroke, opacity) = color_to_svg(*color);
                let _ = writeln!(
                    self.body,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-opacity="{opacity}" stroke-width="{}"/>"#,
                    fmt_f64(from.x),
                    fmt_f64(from.y),
                    fmt_f64(to.x),
                    fmt_f64(to.y),
                    fmt_f64(*line_width),
                );
            }
            DrawOp::Text(text) => self.write_text(text),
        }
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_f64(v: f64) -> String {
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
