// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use chrono::NaiveDate;
use kurbo::{Point, Rect};
use lifeweeks_grid::{GridLayout, LifeSpan, MAX_LIFE_EXPECTANCY_YEARS};
use lifeweeks_overlay::{EventList, LifeEvent, ParseEventError};
use lifeweeks_plan::DrawPlan;
use lifeweeks_render::{FrameInput, GridStyle, render, week_at_screen_point};
use lifeweeks_view2d::{PanZoomController, ViewTransform, Viewport, ZoomLimits};

use crate::input::InputEvent;

/// Life expectancy a new session starts with.
pub const DEFAULT_LIFE_EXPECTANCY_YEARS: u32 = 80;

/// Canvas placement and appearance of a session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Canvas rectangle in client coordinates. Its origin is subtracted from
    /// every pointer position.
    pub canvas: Rect,
    /// Week arrangement.
    pub layout: GridLayout,
    /// Colors, fonts, and spacing.
    pub style: GridStyle,
    /// Bounds for wheel zoom.
    pub zoom_limits: ZoomLimits,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas: Rect::new(0.0, 0.0, 800.0, 600.0),
            layout: GridLayout::default(),
            style: GridStyle::default(),
            zoom_limits: ZoomLimits::default(),
        }
    }
}

/// State of one interactive chart.
///
/// The session owns the inputs a form would collect (birth date, life
/// expectancy, events), the pan/zoom controller, and the last rendered
/// plan. Every mutation that affects the picture marks the session dirty;
/// [`LifeGridSession::frame`] re-renders only when it is.
#[derive(Clone, Debug)]
pub struct LifeGridSession {
    config: SessionConfig,
    birth_date: Option<NaiveDate>,
    life_expectancy_years: u32,
    events: EventList,
    today: NaiveDate,
    controller: PanZoomController,
    plan: DrawPlan,
    dirty: bool,
}

impl LifeGridSession {
    /// Creates a session with no birth date yet.
    #[must_use]
    pub fn new(config: SessionConfig, today: NaiveDate) -> Self {
        let mut viewport = Viewport::new(config.style.anchor());
        viewport.set_zoom_limits(config.zoom_limits);
        Self {
            config,
            birth_date: None,
            life_expectancy_years: DEFAULT_LIFE_EXPECTANCY_YEARS,
            events: EventList::new(),
            today,
            controller: PanZoomController::new(viewport),
            plan: DrawPlan::empty(),
            dirty: true,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the birth date, if one was entered.
    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Sets or clears the birth date.
    pub fn set_birth_date(&mut self, birth_date: Option<NaiveDate>) {
        if self.birth_date != birth_date {
            self.birth_date = birth_date;
            self.dirty = true;
        }
    }

    /// Sets the birth date from an age in whole years as of today.
    ///
    /// Returns `false` and leaves the birth date alone if the age reaches
    /// before the earliest representable date.
    pub fn set_age(&mut self, age_years: u32) -> bool {
        match LifeSpan::from_age(age_years, self.life_expectancy_years, self.today) {
            Some(span) => {
                self.set_birth_date(Some(span.birth_date()));
                true
            }
            None => false,
        }
    }

    /// Returns the life expectancy in years.
    #[must_use]
    pub fn life_expectancy_years(&self) -> u32 {
        self.life_expectancy_years
    }

    /// Sets the life expectancy, clamped to `1..=120` years.
    pub fn set_life_expectancy(&mut self, years: u32) {
        let years = years.clamp(1, MAX_LIFE_EXPECTANCY_YEARS);
        if self.life_expectancy_years != years {
            self.life_expectancy_years = years;
            self.dirty = true;
        }
    }

    /// The lifespan being drawn, once a birth date is known.
    #[must_use]
    pub fn span(&self) -> Option<LifeSpan> {
        self.birth_date
            .map(|birth| LifeSpan::new(birth, self.life_expectancy_years))
    }

    /// Returns the date that separates lived from unlived weeks.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Moves "today", for example when the session outlives a midnight.
    pub fn set_today(&mut self, today: NaiveDate) {
        if self.today != today {
            self.today = today;
            self.dirty = true;
        }
    }

    /// Returns the events in precedence order.
    #[must_use]
    pub fn events(&self) -> &EventList {
        &self.events
    }

    /// Appends an event and returns its index.
    pub fn add_event(&mut self, event: LifeEvent) -> usize {
        self.dirty = true;
        self.events.push(event)
    }

    /// Validates form input and appends the resulting event.
    pub fn add_event_hex(
        &mut self,
        name: impl Into<String>,
        color: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<usize, ParseEventError> {
        let event = LifeEvent::from_hex(name, color, start, end)?;
        Ok(self.add_event(event))
    }

    /// Removes the event at `index`.
    pub fn remove_event(&mut self, index: usize) -> Option<LifeEvent> {
        let removed = self.events.remove(index);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Returns the week arrangement.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.config.layout
    }

    /// Switches the week arrangement.
    pub fn set_layout(&mut self, layout: GridLayout) {
        if self.config.layout != layout {
            self.config.layout = layout;
            self.dirty = true;
        }
    }

    /// Moves or resizes the canvas.
    pub fn set_canvas(&mut self, canvas: Rect) {
        if self.config.canvas != canvas {
            self.config.canvas = canvas;
            self.dirty = true;
        }
    }

    /// Returns the current pan and zoom.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.controller.transform()
    }

    /// Returns the pan/zoom controller.
    #[must_use]
    pub fn controller(&self) -> &PanZoomController {
        &self.controller
    }

    /// Routes one input event to the pan/zoom controller.
    ///
    /// Returns `true` if the view changed and a new frame is due.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        let changed = match *event {
            InputEvent::Wheel { client, delta_y } => {
                let cursor = self.to_canvas(client);
                self.controller.wheel(cursor, delta_y)
            }
            InputEvent::PointerDown { client } => {
                let pointer = self.to_canvas(client);
                self.controller.pointer_down(pointer);
                false
            }
            InputEvent::PointerMove { client } => {
                let pointer = self.to_canvas(client);
                self.controller.pointer_move(pointer)
            }
            // Ending a drag never moves the view.
            InputEvent::PointerUp => {
                self.controller.pointer_up();
                false
            }
            InputEvent::PointerLeave => {
                self.controller.pointer_leave();
                false
            }
        };
        self.dirty |= changed;
        changed
    }

    /// Restores zoom `1` and zero offset.
    pub fn reset_view(&mut self) {
        self.dirty |= self.controller.reset();
    }

    /// Returns `true` if the next [`LifeGridSession::frame`] will re-render.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Re-renders if anything changed since the last frame.
    ///
    /// Returns the new plan, or `None` when the previous one is still
    /// current. Without a birth date the plan is empty.
    pub fn frame(&mut self) -> Option<DrawPlan> {
        if !self.dirty {
            return None;
        }
        self.plan = match self.span() {
            Some(span) => render(&self.frame_input(&span)),
            None => DrawPlan::empty(),
        };
        self.dirty = false;
        #[cfg(feature = "tracing")]
        tracing::debug!(ops = self.plan.len(), "session re-rendered");
        Some(self.plan.clone())
    }

    /// The most recently rendered plan.
    #[must_use]
    pub fn current_plan(&self) -> &DrawPlan {
        &self.plan
    }

    /// Week under a client-space point, for tooltips.
    #[must_use]
    pub fn week_at_client(&self, client: Point) -> Option<u32> {
        let span = self.span()?;
        week_at_screen_point(&self.frame_input(&span), self.to_canvas(client))
    }

    fn frame_input<'a>(&'a self, span: &'a LifeSpan) -> FrameInput<'a> {
        FrameInput {
            span,
            today: self.today,
            events: &self.events,
            transform: self.controller.transform(),
            layout: self.config.layout,
            canvas: self.config.canvas.size(),
            style: &self.config.style,
        }
    }

    fn to_canvas(&self, client: Point) -> Point {
        client - self.config.canvas.origin().to_vec2()
    }

    /// Ends any drag in progress. Used by the mounted pointer-up listener.
    pub(crate) fn release_pointer(&mut self) -> bool {
        self.controller.pointer_up()
    }
}

#[cfg(test)]
mod tests {
    use lifeweeks_plan::DrawOpKind;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session() -> LifeGridSession {
        let config = SessionConfig {
            canvas: Rect::new(100.0, 50.0, 900.0, 650.0),
            ..SessionConfig::default()
        };
        LifeGridSession::new(config, date(2024, 1, 1))
    }

    #[test]
    fn empty_until_birth_date_is_set() {
        let mut s = session();
        assert!(s.is_dirty());
        assert_eq!(s.frame(), Some(DrawPlan::empty()));
        assert!(s.frame().is_none());

        s.set_birth_date(Some(date(1990, 1, 1)));
        let plan = s.frame().unwrap();
        assert_eq!(plan.count(DrawOpKind::FillRect), 80 * 52);
        assert_eq!(s.current_plan(), &plan);
    }

    #[test]
    fn unchanged_inputs_do_not_dirty() {
        let mut s = session();
        s.set_birth_date(Some(date(1990, 1, 1)));
        let _ = s.frame();
        s.set_birth_date(Some(date(1990, 1, 1)));
        s.set_life_expectancy(80);
        s.set_layout(GridLayout::Calendar);
        s.reset_view();
        assert!(!s.handle(&InputEvent::PointerUp));
        assert!(!s.is_dirty());
        assert!(s.frame().is_none());
    }

    #[test]
    fn expectancy_is_clamped() {
        let mut s = session();
        s.set_life_expectancy(0);
        assert_eq!(s.life_expectancy_years(), 1);
        s.set_life_expectancy(500);
        assert_eq!(s.life_expectancy_years(), 120);
    }

    #[test]
    fn age_sets_birth_date() {
        let mut s = session();
        assert!(s.set_age(34));
        assert_eq!(s.birth_date(), Some(date(1990, 1, 1)));
    }

    #[test]
    fn client_coordinates_are_made_canvas_relative() {
        let mut s = session();
        s.handle(&InputEvent::PointerDown {
            client: Point::new(150.0, 80.0),
        });
        assert!(s.handle(&InputEvent::PointerMove {
            client: Point::new(170.0, 90.0),
        }));
        assert_eq!(s.transform().offset, kurbo::Vec2::new(20.0, 10.0));

        // Zooming at canvas (40, 40), the anchor, keeps the world origin put.
        let mut s = session();
        assert!(s.handle(&InputEvent::Wheel {
            client: Point::new(140.0, 90.0),
            delta_y: -1.0,
        }));
        assert_eq!(s.transform().offset, kurbo::Vec2::ZERO);
        assert!(s.transform().zoom > 1.0);
    }

    #[test]
    fn event_edits_dirty_the_session() {
        let mut s = session();
        s.set_birth_date(Some(date(1990, 1, 1)));
        let _ = s.frame();
        let index = s
            .add_event_hex("School", "#f59e0b", date(1996, 9, 1), date(2008, 6, 30))
            .unwrap();
        assert!(s.is_dirty());
        let _ = s.frame();
        assert!(s.remove_event(7).is_none());
        assert!(!s.is_dirty());
        assert!(s.remove_event(index).is_some());
        assert!(s.is_dirty());
        assert_eq!(
            s.add_event_hex("", "#f59e0b", date(1996, 9, 1), date(1996, 9, 1)),
            Err(ParseEventError::EmptyName)
        );
    }

    #[test]
    fn hit_test_uses_client_space() {
        let mut s = session();
        assert_eq!(s.week_at_client(Point::new(145.0, 95.0)), None);
        s.set_birth_date(Some(date(1990, 1, 1)));
        // Canvas origin (100, 50) plus anchor (40, 40) puts week 0 at client (140, 90).
        assert_eq!(s.week_at_client(Point::new(145.0, 95.0)), Some(0));
        assert_eq!(s.week_at_client(Point::new(145.0, 107.0)), Some(52));
    }
}
