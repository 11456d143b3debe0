//! Display formatting for backend timestamps.
//!
//! The backend emits a mix of RFC 3339 instants, naive `YYYY-MM-DDTHH:MM:SS`
//! stamps, and bare dates. Values that parse render as `YYYY-MM-DD` /
//! `HH:MM`; anything else passes through verbatim so a malformed record
//! still shows something attributable instead of an "Invalid Date" artifact.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

const DATE_FMT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");
const TIME_FMT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]");
const NAIVE_FMT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

fn parse(raw: &str) -> Option<(Date, Option<Time>)> {
    if let Ok(odt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some((odt.date(), Some(odt.time())));
    }
    if let Ok(pdt) = PrimitiveDateTime::parse(raw, NAIVE_FMT) {
        return Some((pdt.date(), Some(pdt.time())));
    }
    if let Ok(date) = Date::parse(raw, DATE_FMT) {
        return Some((date, None));
    }
    None
}

/// Format the date portion of a backend timestamp, `YYYY-MM-DD`.
#[must_use]
pub fn format_date(raw: &str) -> String {
    match parse(raw) {
        Some((date, _)) => date.format(DATE_FMT).unwrap_or_else(|_| raw.to_owned()),
        None => raw.to_owned(),
    }
}

/// Format the time portion of a backend timestamp, `HH:MM`.
/// Bare dates and unparseable values pass through verbatim.
#[must_use]
pub fn format_time(raw: &str) -> String {
    match parse(raw) {
        Some((_, Some(t))) => t.format(TIME_FMT).unwrap_or_else(|_| raw.to_owned()),
        _ => raw.to_owned(),
    }
}
