//! Display-string codec.
//!
//! The canonical form lists enabled days Monday first, one
//! `"<day> <start>-<end>"` segment per day joined with `", "`:
//!
//! ```text
//! Vie 9am-6pm, Sáb 9am-6pm
//! ```
//!
//! A schedule with no enabled day encodes as [`UNAVAILABLE`]. Decoding also
//! accepts the older single-range form (`"Lun-Vie 6pm-10pm"`). Text matching
//! neither shape decodes to the all-disabled schedule.

use std::fmt;

use chrono::{NaiveTime, Weekday};
use escena_model::text::fold;
use serde::Serialize;
use tracing::debug;

use crate::day::{days_between, parse_day, short_name};
use crate::time::{format_time, parse_time};
use crate::week::WeeklySchedule;

/// Encoding of a schedule with no enabled day.
pub const UNAVAILABLE: &str = "No disponible";

/// Hours of one day in a per-day list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayHours {
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// The recognized shapes of a stored schedule string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ScheduleShape {
    /// Comma-separated `"<day> <start>-<end>"` segments. Empty for
    /// [`UNAVAILABLE`].
    PerDayList { days: Vec<DayHours> },
    /// `"<first>-<last> <start>-<end>"`, every day from `first` to `last`.
    DayRange {
        first: Weekday,
        last: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    },
    /// Blank or free-form text.
    Unrecognized,
}

impl ScheduleShape {
    /// Work out which shape `text` has.
    pub fn classify(text: &str) -> Self {
        let text = text.trim_end_matches(|c: char| c == ',' || c.is_whitespace());
        let text = text.trim_start();
        if text.is_empty() {
            return Self::Unrecognized;
        }
        if fold(text) == fold(UNAVAILABLE) {
            return Self::PerDayList { days: Vec::new() };
        }
        if !text.contains(',')
            && let Some(range) = decode_range(text)
        {
            return range;
        }
        decode_list(text).unwrap_or(Self::Unrecognized)
    }

    /// Short label for reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PerDayList { .. } => "per_day_list",
            Self::DayRange { .. } => "day_range",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Build the schedule this shape describes.
    pub fn to_schedule(&self) -> WeeklySchedule {
        match self {
            Self::PerDayList { days } => days
                .iter()
                .fold(WeeklySchedule::new(), |schedule, hours| {
                    schedule.with_day(hours.day, hours.start, hours.end)
                }),
            Self::DayRange {
                first,
                last,
                start,
                end,
            } => days_between(*first, *last)
                .into_iter()
                .fold(WeeklySchedule::new(), |schedule, day| {
                    schedule.with_day(day, *start, *end)
                }),
            Self::Unrecognized => WeeklySchedule::new(),
        }
    }
}

/// `"<start>-<end>"` with either token in any [`parse_time`] form.
fn decode_hours(text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (start, end) = text.split_once('-')?;
    Some((parse_time(start)?, parse_time(end)?))
}

fn split_day_token(segment: &str) -> Option<(&str, &str)> {
    let segment = segment.trim();
    segment
        .split_once(char::is_whitespace)
        .map(|(day, hours)| (day, hours.trim()))
}

fn decode_range(text: &str) -> Option<ScheduleShape> {
    let (days, hours) = split_day_token(text)?;
    let (first, last) = days.split_once('-')?;
    let (first, last) = (parse_day(first)?, parse_day(last)?);
    let (start, end) = decode_hours(hours)?;
    Some(ScheduleShape::DayRange {
        first,
        last,
        start,
        end,
    })
}

fn decode_day(segment: &str) -> Option<DayHours> {
    let (day, hours) = split_day_token(segment)?;
    let day = parse_day(day)?;
    let (start, end) = decode_hours(hours)?;
    Some(DayHours { day, start, end })
}

fn decode_list(text: &str) -> Option<ScheduleShape> {
    let days = text
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(decode_day)
        .collect::<Option<Vec<_>>>()?;
    if days.is_empty() {
        return None;
    }
    let mut seen = Vec::with_capacity(days.len());
    for hours in &days {
        if seen.contains(&hours.day) {
            debug!(day = %hours.day, "day listed twice in schedule text, keeping the later hours");
        } else {
            seen.push(hours.day);
        }
    }
    Some(ScheduleShape::PerDayList { days })
}

impl WeeklySchedule {
    /// Canonical display string, e.g. `"Vie 9am-6pm, Sáb 9am-6pm"`.
    pub fn to_display_string(&self) -> String {
        let segments: Vec<String> = self
            .enabled()
            .map(|entry| {
                format!(
                    "{} {}-{}",
                    short_name(entry.day),
                    format_time(entry.start),
                    format_time(entry.end)
                )
            })
            .collect();
        if segments.is_empty() {
            UNAVAILABLE.to_string()
        } else {
            segments.join(", ")
        }
    }

    /// Decode a stored display string. Never fails: unrecognized text yields
    /// the all-disabled schedule.
    pub fn from_display_string(text: &str) -> Self {
        let shape = ScheduleShape::classify(text);
        if shape == ScheduleShape::Unrecognized && !text.trim().is_empty() {
            debug!(text, "unrecognized schedule text, treating as unavailable");
        }
        shape.to_schedule()
    }
}

impl fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
