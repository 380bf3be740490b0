// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill precedence across a whole grid.

use chrono::NaiveDate;
use lifeweeks_grid::{CellMetrics, GridGeometry, GridLayout, LifeSpan};
use lifeweeks_overlay::{EventList, LifeEvent, WeekShade, shade_week};
use peniko::Color;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn earlier_event_owns_every_shared_week() {
    let span = LifeSpan::new(date(1990, 1, 1), 10);
    let grid = GridGeometry::for_lifespan(&span, GridLayout::Calendar, CellMetrics::default());
    let mut events = EventList::new();
    let a = events.push(LifeEvent::new(
        "A",
        Color::from_rgb8(255, 0, 0),
        date(1992, 1, 1),
        date(1994, 1, 1),
    ));
    let b = events.push(LifeEvent::new(
        "B",
        Color::from_rgb8(0, 0, 255),
        date(1993, 1, 1),
        date(1995, 1, 1),
    ));

    let mut seen_a = 0;
    let mut seen_b = 0;
    for (week, _) in grid.cells() {
        let first_day = span.date_of_week(week).unwrap();
        let in_a = events.get(a).unwrap().contains(first_day);
        let in_b = events.get(b).unwrap().contains(first_day);
        let shade = shade_week(&span, &events, week, 0);
        match (in_a, in_b) {
            (true, _) => {
                assert_eq!(shade, WeekShade::Event(a), "week {week}");
                seen_a += 1;
            }
            (false, true) => {
                assert_eq!(shade, WeekShade::Event(b), "week {week}");
                seen_b += 1;
            }
            (false, false) => assert_eq!(shade, WeekShade::Unlived, "week {week}"),
        }
    }
    assert!(seen_a > 0 && seen_b > 0, "both events should own some weeks");
}

#[test]
fn lived_count_without_events_matches_weeks_lived() {
    let span = LifeSpan::new(date(1990, 1, 1), 80);
    let today = date(2024, 1, 1);
    let lived = span.lived_weeks_in_grid(today);
    let events = EventList::new();
    let count = (0..span.total_weeks())
        .filter(|&w| shade_week(&span, &events, w, lived) == WeekShade::Lived)
        .count();
    assert_eq!(count, 1774);
}
