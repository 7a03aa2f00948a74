//! Per-day availability state.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::day::WEEK;
use crate::time::truncate_to_minute;

fn default_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

fn default_end() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default()
}

/// Availability of one weekday.
///
/// A disabled entry is the empty state: its stored hours are only the values
/// the editor shows when the day is switched back on, so two disabled entries
/// for the same day compare equal whatever their hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub enabled: bool,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ScheduleEntry {
    /// Disabled, 09:00 to 18:00.
    pub fn new(day: Weekday) -> Self {
        Self {
            day,
            enabled: false,
            start: default_start(),
            end: default_end(),
        }
    }
}

impl PartialEq for ScheduleEntry {
    fn eq(&self, other: &Self) -> bool {
        self.day == other.day
            && self.enabled == other.enabled
            && (!self.enabled || (self.start == other.start && self.end == other.end))
    }
}

impl Eq for ScheduleEntry {}

/// The seven fixed day slots of an availability schedule.
///
/// Slots are never added or removed; every mutation edits one day in place.
/// Serialized as a list of entries in Monday-first order; days missing from
/// a stored list come back disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScheduleEntry>", into = "Vec<ScheduleEntry>")]
pub struct WeeklySchedule {
    /// Indexed by [`Weekday::num_days_from_monday`].
    entries: [ScheduleEntry; 7],
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl WeeklySchedule {
    /// Every day disabled with default hours.
    pub fn new() -> Self {
        Self {
            entries: WEEK.map(ScheduleEntry::new),
        }
    }

    fn slot(&mut self, day: Weekday) -> &mut ScheduleEntry {
        &mut self.entries[day.num_days_from_monday() as usize]
    }

    pub fn entry(&self, day: Weekday) -> &ScheduleEntry {
        &self.entries[day.num_days_from_monday() as usize]
    }

    /// All seven entries, Monday first.
    pub fn entries(&self) -> &[ScheduleEntry; 7] {
        &self.entries
    }

    /// Enabled entries, Monday first.
    pub fn enabled(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    /// Whether no day is enabled.
    pub fn is_unavailable(&self) -> bool {
        self.enabled().next().is_none()
    }

    pub fn set_enabled(&mut self, day: Weekday, enabled: bool) {
        self.slot(day).enabled = enabled;
    }

    pub fn toggle(&mut self, day: Weekday) {
        let entry = self.slot(day);
        entry.enabled = !entry.enabled;
    }

    pub fn set_start(&mut self, day: Weekday, start: NaiveTime) {
        self.slot(day).start = truncate_to_minute(start);
    }

    pub fn set_end(&mut self, day: Weekday, end: NaiveTime) {
        self.slot(day).end = truncate_to_minute(end);
    }

    /// Set both hours of a day without changing whether it is enabled.
    pub fn set_hours(&mut self, day: Weekday, start: NaiveTime, end: NaiveTime) {
        self.set_start(day, start);
        self.set_end(day, end);
    }

    /// Enable a day with the given hours.
    #[must_use]
    pub fn with_day(mut self, day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        self.set_hours(day, start, end);
        self.set_enabled(day, true);
        self
    }
}

impl From<Vec<ScheduleEntry>> for WeeklySchedule {
    fn from(entries: Vec<ScheduleEntry>) -> Self {
        let mut schedule = Self::new();
        for entry in entries {
            *schedule.slot(entry.day) = ScheduleEntry {
                start: truncate_to_minute(entry.start),
                end: truncate_to_minute(entry.end),
                ..entry
            };
        }
        schedule
    }
}

impl From<WeeklySchedule> for Vec<ScheduleEntry> {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule.entries.to_vec()
    }
}
