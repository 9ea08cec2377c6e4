use chrono::NaiveDate;

use crate::config::DATE_FORMAT;

/// Wasm-safe monotonic clock used by `trace_time!`.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    /// Length of a `YYYY-MM-DD` string.
    pub const ISO_DATE_LEN: usize = 10;
    const DASH_POSITIONS: [usize; 2] = [4, 7];
}

/// Checks the fixed-width digit layout only: 4 digits, dash, 2 digits, dash, 2 digits.
/// `2026-02-30` passes here; the calendar check happens in `parse_calendar_date`.
pub(crate) fn has_iso_date_layout(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == TimeUtils::ISO_DATE_LEN
        && bytes.iter().enumerate().all(|(idx, b)| {
            if TimeUtils::DASH_POSITIONS.contains(&idx) {
                *b == b'-'
            } else {
                b.is_ascii_digit()
            }
        })
}

/// Parses a strict `YYYY-MM-DD` string into a real calendar date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if !has_iso_date_layout(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Whole calendar days from `earlier` to `later` (negative if reversed).
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> f64 {
    (later - earlier).num_days() as f64
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
