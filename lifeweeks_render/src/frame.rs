// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::f64::consts::FRAC_PI_2;

use chrono::NaiveDate;
use kurbo::{Affine, Point, Size};
use lifeweeks_grid::{GridGeometry, GridLayout, LifeSpan};
use lifeweeks_overlay::{EventList, WeekShade, layout_events, shade_week};
use lifeweeks_plan::{DrawOp, DrawPlan, PlanBuilder, TextAlign, TextBaseline, TextOp};
use lifeweeks_view2d::ViewTransform;
use peniko::Color;

use crate::style::GridStyle;

/// Everything one frame depends on.
///
/// The lifespan, events, and style are borrowed from whoever owns them.
#[derive(Copy, Clone, Debug)]
pub struct FrameInput<'a> {
    /// Birth date and life expectancy.
    pub span: &'a LifeSpan,
    /// The date that splits lived from unlived weeks.
    pub today: NaiveDate,
    /// Life events, in precedence order.
    pub events: &'a EventList,
    /// Current pan and zoom.
    pub transform: ViewTransform,
    /// Week arrangement.
    pub layout: GridLayout,
    /// Canvas size in screen pixels. Used to place the axis titles.
    pub canvas: Size,
    /// Colors, fonts, and spacing.
    pub style: &'a GridStyle,
}

impl FrameInput<'_> {
    /// Grid geometry for this frame's lifespan, layout, and metrics.
    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::for_lifespan(self.span, self.layout, self.style.metrics)
    }

    /// World-to-screen mapping for this frame.
    #[must_use]
    pub fn world_to_screen(&self) -> Affine {
        self.transform.to_affine(self.style.anchor())
    }
}

/// Renders one frame into a draw plan in screen space.
///
/// Primitives are emitted in this order:
///
/// 1. One filled rectangle per week, in week order.
/// 2. For each event on the grid: its ring (point events only), its
///    connector segments, then its label.
/// 3. Row tick labels down the left margin and column tick labels along
///    the top margin.
/// 4. The "Age" and "Week of the Year" titles.
///
/// A lifespan of zero years produces an empty plan.
#[must_use]
pub fn render(input: &FrameInput<'_>) -> DrawPlan {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "render",
        weeks = input.span.total_weeks(),
        events = input.events.len(),
        zoom = input.transform.zoom,
    )
    .entered();

    let grid = input.geometry();
    if grid.is_empty() {
        return DrawPlan::empty();
    }
    let style = input.style;
    let affine = input.world_to_screen();
    let mut plan = PlanBuilder::with_capacity(grid.total_weeks() as usize + 64);

    // Cells.
    let lived = input.span.lived_weeks_in_grid(input.today);
    for week in 0..grid.total_weeks() {
        let Some(cell) = grid.cell_of_checked(week) else {
            continue;
        };
        let color = match shade_week(input.span, input.events, week, lived) {
            WeekShade::Lived => style.lived_color,
            WeekShade::Unlived => style.unlived_color,
            WeekShade::Event(index) => input
                .events
                .get(index)
                .map_or(style.unlived_color, |event| event.color()),
        };
        let rect = affine.transform_rect_bbox(style.metrics.cell_rect(cell));
        plan.fill_rect(rect, color);
    }

    // Event markers, connectors, and labels.
    let zoom = input.transform.zoom;
    for overlay in layout_events(input.events, input.span, &grid, &style.overlay) {
        let Some(event) = input.events.get(overlay.index) else {
            continue;
        };
        let color = event.color();
        if let Some(ring) = overlay.ring {
            plan.stroke_circle(
                affine * ring.center,
                ring.radius * zoom,
                color,
                style.ring_line_width * zoom,
            );
        }
        for line in overlay.connector.lines() {
            plan.line(
                affine * line.p0,
                affine * line.p1,
                color,
                style.connector_line_width,
            );
        }
        plan.text(
            affine * overlay.label_origin,
            event.name(),
            TextAlign::Left,
            TextBaseline::Middle,
            color,
            &style.font,
        );
    }

    push_ticks(&mut plan, input, &grid);
    push_titles(&mut plan, input);

    let plan = plan.finish();
    #[cfg(feature = "tracing")]
    tracing::debug!(ops = plan.len(), "frame rendered");
    plan
}

/// Week under a screen-space point, if any.
#[must_use]
pub fn week_at_screen_point(input: &FrameInput<'_>, screen: Point) -> Option<u32> {
    let world = input
        .transform
        .screen_to_world(input.style.anchor(), screen);
    input.geometry().week_at_point(world)
}

fn push_ticks(plan: &mut PlanBuilder, input: &FrameInput<'_>, grid: &GridGeometry) {
    let style = input.style;
    let step = style.tick_step.max(1);
    let pitch = style.metrics.pitch();
    let anchor = style.anchor();

    // Ticks follow the grid through pan and zoom along one axis only; the
    // other coordinate stays pinned inside the label margin.
    for row in (0..=grid.rows()).filter(|row| row % step == 0) {
        let world = Point::new(0.0, f64::from(row) * pitch);
        let y = input.transform.world_to_screen(anchor, world).y;
        plan.text(
            Point::new(style.label_margin - style.row_tick_inset, y),
            row.to_string(),
            TextAlign::Right,
            TextBaseline::Middle,
            style.text_color,
            &style.font,
        );
    }
    for col in (0..=grid.cols()).filter(|col| col % step == 0) {
        let world = Point::new(f64::from(col) * pitch, 0.0);
        let x = input.transform.world_to_screen(anchor, world).x;
        plan.text(
            Point::new(x, style.label_margin - style.column_tick_rise),
            col.to_string(),
            TextAlign::Center,
            TextBaseline::Top,
            style.text_color,
            &style.font,
        );
    }
}

fn push_titles(plan: &mut PlanBuilder, input: &FrameInput<'_>) {
    let style = input.style;
    let title = |origin: Point, content: &str, rotation: f64| {
        DrawOp::Text(TextOp {
            origin,
            content: String::from(content),
            align: TextAlign::Center,
            baseline: TextBaseline::Top,
            color: style.text_color,
            font: style.font.clone(),
            rotation,
        })
    };
    plan.push(title(
        Point::new(style.title_inset, input.canvas.height / 2.0),
        "Age",
        -FRAC_PI_2,
    ));
    plan.push(title(
        Point::new(input.canvas.width / 2.0, style.title_inset),
        "Week of the Year",
        0.0,
    ));
}

/// Fill color of `week` in a plan produced by [`render`], for inspection.
///
/// Returns `None` if the plan is empty or `week` is out of range.
#[must_use]
pub fn cell_fill(plan: &DrawPlan, week: u32) -> Option<Color> {
    match plan.ops().get(week as usize)? {
        DrawOp::FillRect { color, .. } => Some(*color),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Vec2};
    use lifeweeks_overlay::LifeEvent;
    use lifeweeks_plan::DrawOpKind;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn frame<'a>(
        span: &'a LifeSpan,
        events: &'a EventList,
        style: &'a GridStyle,
        transform: ViewTransform,
    ) -> FrameInput<'a> {
        FrameInput {
            span,
            today: date(2024, 1, 1),
            events,
            transform,
            layout: GridLayout::Calendar,
            canvas: Size::new(800.0, 1200.0),
            style,
        }
    }

    #[test]
    fn zero_expectancy_renders_nothing() {
        let span = LifeSpan::new(date(1990, 1, 1), 0);
        let events = EventList::new();
        let style = GridStyle::default();
        let plan = render(&frame(&span, &events, &style, ViewTransform::IDENTITY));
        assert!(plan.is_empty());
    }

    #[test]
    fn known_scenario_cells() {
        let span = LifeSpan::new(date(1990, 1, 1), 80);
        let events = EventList::new();
        let style = GridStyle::default();
        let plan = render(&frame(&span, &events, &style, ViewTransform::IDENTITY));

        // Week 1773 is (col 5, row 34): world (60, 408), screen (100, 448).
        assert_eq!(
            plan.ops()[1773],
            DrawOp::FillRect {
                rect: Rect::new(100.0, 448.0, 110.0, 458.0),
                color: style.lived_color,
            }
        );
        assert_eq!(
            plan.ops()[1774],
            DrawOp::FillRect {
                rect: Rect::new(112.0, 448.0, 122.0, 458.0),
                color: style.unlived_color,
            }
        );
        let lived = (0..span.total_weeks())
            .filter(|&w| cell_fill(&plan, w) == Some(style.lived_color))
            .count();
        assert_eq!(lived, 1774);
    }

    #[test]
    fn label_counts_and_titles() {
        let span = LifeSpan::new(date(1990, 1, 1), 80);
        let events = EventList::new();
        let style = GridStyle::default();
        let plan = render(&frame(&span, &events, &style, ViewTransform::IDENTITY));
        // 17 row ticks (0..=80 by 5), 11 column ticks (0..=50 by 5), 2 titles.
        assert_eq!(plan.count(DrawOpKind::Text), 30);
        assert_eq!(plan.count(DrawOpKind::FillRect), 4160);

        let texts: alloc::vec::Vec<&TextOp> = plan.texts().collect();
        let age = texts[texts.len() - 2];
        assert_eq!(age.content, "Age");
        assert_eq!(age.origin, Point::new(10.0, 600.0));
        assert_eq!(age.rotation, -FRAC_PI_2);
        let week_title = texts[texts.len() - 1];
        assert_eq!(week_title.content, "Week of the Year");
        assert_eq!(week_title.origin, Point::new(400.0, 10.0));
    }

    #[test]
    fn ticks_follow_transform() {
        let span = LifeSpan::new(date(1990, 1, 1), 80);
        let events = EventList::new();
        let style = GridStyle::default();
        let transform = ViewTransform::new(2.0, Vec2::new(10.0, -20.0));
        let plan = render(&frame(&span, &events, &style, transform));

        let row_five = plan
            .texts()
            .find(|t| t.content == "5" && t.align == TextAlign::Right)
            .unwrap();
        // 40 + 5 * 12 * 2 - 20
        assert_eq!(row_five.origin, Point::new(35.0, 140.0));
        let col_five = plan
            .texts()
            .find(|t| t.content == "5" && t.align == TextAlign::Center)
            .unwrap();
        // 40 + 5 * 12 * 2 + 10
        assert_eq!(col_five.origin, Point::new(170.0, 25.0));

        // Cell 0 is scaled and moved.
        assert_eq!(
            plan.ops()[0],
            DrawOp::FillRect {
                rect: Rect::new(50.0, 20.0, 70.0, 40.0),
                color: style.lived_color,
            }
        );
    }

    #[test]
    fn single_week_event_draws_one_ring_and_one_connector() {
        let span = LifeSpan::new(date(1990, 1, 1), 80);
        let day = span.date_of_week(100).unwrap();
        let red = Color::from_rgb8(220, 38, 38);
        let events = EventList::from(alloc::vec![LifeEvent::new("x", red, day, day)]);
        let style = GridStyle::default();
        let plan = render(&frame(&span, &events, &style, ViewTransform::IDENTITY));

        assert_eq!(plan.count(DrawOpKind::StrokeCircle), 1);
        assert_eq!(plan.count(DrawOpKind::Line), 1);
        assert_eq!(cell_fill(&plan, 100), Some(red));
        let ring = plan
            .iter()
            .find(|op| op.kind() == DrawOpKind::StrokeCircle)
            .unwrap();
        assert_eq!(
            *ring,
            DrawOp::StrokeCircle {
                center: Point::new(621.0, 57.0),
                radius: 6.0,
                color: red,
                line_width: 2.0,
            }
        );
    }

    #[test]
    fn ring_scales_with_zoom() {
        let span = LifeSpan::new(date(1990, 1, 1), 80);
        let day = span.date_of_week(0).unwrap();
        let events = EventList::from(alloc::vec![LifeEvent::new("x", Color::BLACK, day, day)]);
        let style = GridStyle::default();
        let transform = ViewTransform::new(2.0, Vec2::ZERO);
        let plan = render(&frame(&span, &events, &style, transform));
        let stroke = plan.iter().find_map(|op| match op {
            DrawOp::StrokeCircle {
                radius, line_width, ..
            } => Some((*radius, *line_width)),
            _ => None,
        });
        assert_eq!(stroke, Some((12.0, 4.0)));
    }

    #[test]
    fn ring_stroke_thins_when_zoomed_out() {
        let span = LifeSpan::new(date(1990, 1, 1), 80);
        let day = span.date_of_week(0).unwrap();
        let events = EventList::from(alloc::vec![LifeEvent::new("x", Color::BLACK, day, day)]);
        let style = GridStyle::default();
        let transform = ViewTransform::new(0.1, Vec2::ZERO);
        let plan = render(&frame(&span, &events, &style, transform));
        let (radius, line_width) = plan
            .iter()
            .find_map(|op| match op {
                DrawOp::StrokeCircle {
                    radius, line_width, ..
                } => Some((*radius, *line_width)),
                _ => None,
            })
            .unwrap();
        assert!((radius - 0.6).abs() < 1e-9);
        assert!((line_width - 0.2).abs() < 1e-9);
        // Stroke and radius keep the proportions of the unzoomed ring.
        assert!((radius / line_width - 3.0).abs() < 1e-9);
    }

    #[test]
    fn screen_hit_test_inverts_transform() {
        let span = LifeSpan::new(date(1990, 1, 1), 80);
        let events = EventList::new();
        let style = GridStyle::default();
        let transform = ViewTransform::new(2.0, Vec2::new(10.0, -20.0));
        let input = frame(&span, &events, &style, transform);
        // Week 0 covers screen (50, 20)..(70, 40).
        assert_eq!(week_at_screen_point(&input, Point::new(55.0, 25.0)), Some(0));
        // Week 53 is (col 1, row 1): screen (74, 44)..(94, 64).
        assert_eq!(week_at_screen_point(&input, Point::new(80.0, 50.0)), Some(53));
        assert_eq!(week_at_screen_point(&input, Point::new(5.0, 5.0)), None);
    }
}
