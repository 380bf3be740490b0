// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lifeweeks_grid::LifeSpan;

use crate::event::EventList;

/// What a single week cell is filled with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WeekShade {
    /// A week already lived, not covered by any event.
    Lived,
    /// A week still ahead, not covered by any event.
    Unlived,
    /// A week whose first day falls inside the event at this index.
    Event(usize),
}

/// Classifies `week` for filling.
///
/// The first day of the week is tested against `events` with
/// [`EventList::event_for_date`], so the first matching event wins. Weeks
/// no event covers are [`WeekShade::Lived`] when `week < weeks_lived`.
#[must_use]
pub fn shade_week(span: &LifeSpan, events: &EventList, week: u32, weeks_lived: u32) -> WeekShade {
    let event = span
        .date_of_week(week)
        .and_then(|first_day| events.event_for_date(first_day));
    match event {
        Some((index, _)) => WeekShade::Event(index),
        None if week < weeks_lived => WeekShade::Lived,
        None => WeekShade::Unlived,
    }
}
