// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use chrono::NaiveDate;
use peniko::Color;
use peniko::color::{Srgb, parse_color};

/// A named, colored date range in someone's life.
///
/// `start <= end` always holds; the constructors swap a reversed range.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeEvent {
    name: String,
    color: Color,
    start: NaiveDate,
    end: NaiveDate,
}

impl LifeEvent {
    /// Creates an event covering `start..=end`.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, start: NaiveDate, end: NaiveDate) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            name: name.into(),
            color,
            start,
            end,
        }
    }

    /// Creates an event from a hex color string such as `#ff8800`.
    ///
    /// This is the validation point for form input: an empty name or an
    /// unparsable color is rejected here, and everything downstream assumes
    /// events are complete.
    pub fn from_hex(
        name: impl Into<String>,
        color: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, ParseEventError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ParseEventError::EmptyName);
        }
        let color = parse_css_color(color)?;
        Ok(Self::new(name, color, start, end))
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the event color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// First day of the event.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the event, inclusive.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if `date` lies within `start..=end`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parses a CSS color string into an sRGB color.
pub fn parse_css_color(input: &str) -> Result<Color, ParseEventError> {
    parse_color(input.trim())
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| ParseEventError::InvalidColor {
            input: input.into(),
        })
}

/// Why an event could not be built from form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseEventError {
    /// The name was empty or whitespace.
    EmptyName,
    /// The color string was not a CSS color.
    InvalidColor {
        /// The rejected input.
        input: String,
    },
}

impl fmt::Display for ParseEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("event name is empty"),
            Self::InvalidColor { input } => write!(f, "`{input}` is not a CSS color"),
        }
    }
}

impl core::error::Error for ParseEventError {}

/// Ordered list of life events.
///
/// Order matters: when events overlap, the one added first colors the
/// shared weeks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventList {
    events: Vec<LifeEvent>,
}

impl EventList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event and returns its index.
    pub fn push(&mut self, event: LifeEvent) -> usize {
        self.events.push(event);
        self.events.len() - 1
    }

    /// Removes the event at `index`, shifting later events down.
    pub fn remove(&mut self, index: usize) -> Option<LifeEvent> {
        (index < self.events.len()).then(|| self.events.remove(index))
    }

    /// Removes every event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the event at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LifeEvent> {
        self.events.get(index)
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if there are no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[LifeEvent] {
        &self.events
    }

    /// Iterates events in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, LifeEvent> {
        self.events.iter()
    }

    /// The event that colors `date`, with its index.
    ///
    /// When several events contain `date`, the **first** one in list order
    /// wins. Later events never paint over earlier ones.
    #[must_use]
    pub fn event_for_date(&self, date: NaiveDate) -> Option<(usize, &LifeEvent)> {
        self.events
            .iter()
            .enumerate()
            .find(|(_, event)| event.contains(date))
    }
}

impl From<Vec<LifeEvent>> for EventList {
    fn from(events: Vec<LifeEvent>) -> Self {
        Self { events }
    }
}

impl FromIterator<LifeEvent> for EventList {
    fn from_iter<I: IntoIterator<Item = LifeEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a LifeEvent;
    type IntoIter = core::slice::Iter<'a, LifeEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
