//! Weekly availability schedules.
//!
//! A [`WeeklySchedule`] holds seven fixed [`ScheduleEntry`] slots edited by
//! the profile editor. It is stored as a single display string, the only
//! value the backend keeps for it:
//!
//! ```
//! use chrono::{NaiveTime, Weekday};
//! use escena_schedule::WeeklySchedule;
//!
//! let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
//! let six = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
//! let schedule = WeeklySchedule::new()
//!     .with_day(Weekday::Fri, nine, six)
//!     .with_day(Weekday::Sat, nine, six);
//!
//! let text = schedule.to_display_string();
//! assert_eq!(text, "Vie 9am-6pm, Sáb 9am-6pm");
//! assert_eq!(WeeklySchedule::from_display_string(&text), schedule);
//! ```

#![deny(unsafe_code)]

pub mod codec;
pub mod day;
pub mod time;
pub mod week;

pub use codec::{DayHours, ScheduleShape, UNAVAILABLE};
pub use day::{WEEK, long_name, parse_day, short_name};
pub use time::{format_time, format_time_full, parse_time};
pub use week::{ScheduleEntry, WeeklySchedule};
