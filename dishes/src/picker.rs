// Copyright 2024 Jeremy Wall (jeremy@marzhillstudios.com)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Model for the scrolling time of day picker.
//!
//! A [`Wheel`] is a finite list of values laid out vertically with a fixed
//! item height. The item closest to the top of the viewport is the selected
//! one. Scrolling settles on item boundaries and a value can also be picked
//! directly.
use std::fmt;
use std::ops::RangeInclusive;

use chrono::NaiveTime;
use tracing::debug;

pub const DEFAULT_HOUR: u8 = 6;
pub const DEFAULT_MINUTE: u8 = 30;

/// Format a wheel value the way it is displayed: two digits, zero padded.
pub fn pad2(value: u8) -> String {
    format!("{:02}", value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    first: u8,
    last: u8,
    selected: u8,
}

impl Wheel {
    /// A wheel over `first..=last` starting at `initial`. An out of range
    /// initial value is clamped into the range.
    pub fn new(first: u8, last: u8, initial: u8) -> Self {
        let (first, last) = if first <= last {
            (first, last)
        } else {
            (last, first)
        };
        Self {
            first,
            last,
            selected: initial.clamp(first, last),
        }
    }

    pub fn hours() -> Self {
        Self::new(1, 12, DEFAULT_HOUR)
    }

    pub fn minutes() -> Self {
        Self::new(0, 59, DEFAULT_MINUTE)
    }

    pub fn selected(&self) -> u8 {
        self.selected
    }

    pub fn values(&self) -> RangeInclusive<u8> {
        self.first..=self.last
    }

    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    pub fn contains(&self, value: u8) -> bool {
        self.values().contains(&value)
    }

    /// Index of the selected value within the wheel.
    pub fn selected_index(&self) -> usize {
        (self.selected - self.first) as usize
    }

    /// Pick a value directly. Out of range values are ignored.
    pub fn select(&mut self, value: u8) -> bool {
        if !self.contains(value) {
            debug!(value, first = self.first, last = self.last, "ignoring out of range selection");
            return false;
        }
        self.selected = value;
        true
    }

    /// Record a scroll position. The item nearest the anchor becomes
    /// selected. Returns the newly selected value.
    pub fn scroll_to(&mut self, offset: f64, item_height: f64) -> u8 {
        if !(item_height > 0.0) || !offset.is_finite() {
            return self.selected;
        }
        let idx = (offset / item_height).round().max(0.0) as usize;
        let idx = idx.min(self.len() - 1);
        self.selected = self.first + idx as u8;
        self.selected
    }

    /// Offset at which `value` sits exactly under the anchor.
    pub fn offset_for(&self, value: u8, item_height: f64) -> Option<f64> {
        if self.contains(value) {
            Some((value - self.first) as f64 * item_height)
        } else {
            None
        }
    }

    /// Snap to the selected item's boundary.
    pub fn settle(&self, item_height: f64) -> f64 {
        self.offset_for(self.selected, item_height).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn label(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hour, minute and AM/PM selection for scheduling a dish. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePicker {
    pub hours: Wheel,
    pub minutes: Wheel,
    meridiem: Meridiem,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self {
            hours: Wheel::hours(),
            minutes: Wheel::minutes(),
            meridiem: Meridiem::Am,
        }
    }
}

impl TimePicker {
    pub fn hour(&self) -> u8 {
        self.hours.selected()
    }

    pub fn minute(&self) -> u8 {
        self.minutes.selected()
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    pub fn set_meridiem(&mut self, meridiem: Meridiem) {
        self.meridiem = meridiem;
    }

    pub fn is_am(&self) -> bool {
        self.meridiem == Meridiem::Am
    }

    /// e.g. `06:30 AM`
    pub fn label(&self) -> String {
        format!("{}:{} {}", pad2(self.hour()), pad2(self.minute()), self.meridiem)
    }

    /// The selection as a 24 hour clock time.
    pub fn as_time(&self) -> Option<NaiveTime> {
        let hour = match (self.meridiem, self.hour()) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        NaiveTime::from_hms_opt(hour as u32, self.minute() as u32, 0)
    }
}
