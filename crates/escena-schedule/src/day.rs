//! Day names and week order.

use chrono::Weekday;
use escena_model::text::fold;

/// Display order of the week (Monday first).
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Short name used in display strings.
pub fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lun",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mié",
        Weekday::Thu => "Jue",
        Weekday::Fri => "Vie",
        Weekday::Sat => "Sáb",
        Weekday::Sun => "Dom",
    }
}

pub fn long_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Parse a short or long day name, ignoring case, accents and a trailing
/// period (`"Mié"`, `"mie."`, `"MIERCOLES"`).
pub fn parse_day(token: &str) -> Option<Weekday> {
    let folded = fold(token.trim());
    let key = folded.strip_suffix('.').unwrap_or(&folded);
    WEEK.into_iter().find(|&day| {
        key == fold(short_name(day)) || key == fold(long_name(day))
    })
}

/// Every day from `first` to `last` inclusive, walking forward and wrapping
/// past Sunday when `last` comes earlier in the week than `first`.
pub(crate) fn days_between(first: Weekday, last: Weekday) -> Vec<Weekday> {
    let mut days = vec![first];
    let mut day = first;
    while day != last {
        day = day.succ();
        days.push(day);
    }
    days
}
