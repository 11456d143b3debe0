//! Month-grid math for the event calendar.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::{Date, Month};

/// One calendar month laid out in weeks of Monday-first cells.
/// `None` cells pad the first and last weeks.
#[must_use]
pub fn month_grid(year: i32, month: Month) -> Vec<[Option<u8>; 7]> {
    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        return Vec::new();
    };
    let days = time::util::days_in_month(month, year);
    let lead = first.weekday().number_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = lead;
    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

/// `YYYY-MM-DD` key for a day in a month, as the events-by-date endpoint
/// expects it.
#[must_use]
pub fn date_key(year: i32, month: Month, day: u8) -> String {
    format!("{year:04}-{:02}-{day:02}", month as u8)
}

/// The month before, rolling the year.
#[must_use]
pub fn previous_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::January => (year - 1, Month::December),
        other => (year, other.previous()),
    }
}

/// The month after, rolling the year.
#[must_use]
pub fn next_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::December => (year + 1, Month::January),
        other => (year, other.next()),
    }
}

/// Heading like `January 2025`.
#[must_use]
pub fn month_label(year: i32, month: Month) -> String {
    format!("{month} {year}")
}
