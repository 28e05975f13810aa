//! Time-of-day arithmetic and the textual date/time forms shiftrack accepts.
//!
//! Shift times are wall-clock values without a date. A shift never spans
//! midnight, so its duration is the plain difference between the end and the
//! start in seconds, expressed in hours.
//!
//! ## Accepted forms
//!
//! - Times: `HH:mm`, `HH:mm:ss`, or an ISO-8601 duration such as `PT9H30M`
//!   (the time-span encoding some shift services use).
//! - Dates: `YYYY-MM-DD`, optionally followed by a `T...` time part which is
//!   ignored, since the service anchors dates to midnight.

use crate::libs::error::ValidationError;
use chrono::{NaiveDate, NaiveTime, Timelike};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds elapsed since midnight, ignoring any fractional second.
pub fn seconds_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight()
}

/// Duration between two times of day, in hours.
///
/// `end` before `start` is a caller error and is reported, not wrapped
/// around midnight.
pub fn duration_hours(start: NaiveTime, end: NaiveTime) -> Result<f64, ValidationError> {
    let start_seconds = seconds_of_day(start);
    let end_seconds = seconds_of_day(end);
    if end_seconds < start_seconds {
        return Err(ValidationError::EndBeforeStart {
            start: format_time(start),
            end: format_time(end),
        });
    }
    Ok(f64::from(end_seconds - start_seconds) / SECONDS_PER_HOUR)
}

/// Parses a time of day from `HH:mm`, `HH:mm:ss` or `PT#H#M#S`.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidTime(trimmed.to_string());

    if trimmed.starts_with('P') {
        return parse_iso_duration(trimmed).ok_or_else(invalid);
    }

    let format = match clock_shape(trimmed) {
        Some(ClockShape::HourMinute) => "%H:%M",
        Some(ClockShape::HourMinuteSecond) => "%H:%M:%S",
        None => return Err(invalid()),
    };
    NaiveTime::parse_from_str(trimmed, format).map_err(|_| invalid())
}

/// Parses a calendar date from `YYYY-MM-DD` or `YYYY-MM-DDT...`.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidDate(trimmed.to_string());

    let bytes = trimmed.as_bytes();
    let date_part = match bytes.len() {
        10 => trimmed,
        n if n > 10 && bytes[10] == b'T' => &trimmed[..10],
        _ => return Err(invalid()),
    };
    if !is_date_shape(date_part.as_bytes()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| invalid())
}

/// Formats a time for the wire: always `HH:mm:ss`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Formats a date for the wire, anchored at midnight.
pub fn format_wire_date(date: NaiveDate) -> String {
    format!("{}T00:00:00", date.format("%Y-%m-%d"))
}

enum ClockShape {
    HourMinute,
    HourMinuteSecond,
}

fn clock_shape(s: &str) -> Option<ClockShape> {
    let b = s.as_bytes();
    let pair = |i: usize| b[i].is_ascii_digit() && b[i + 1].is_ascii_digit();
    match b.len() {
        5 if pair(0) && b[2] == b':' && pair(3) => Some(ClockShape::HourMinute),
        8 if pair(0) && b[2] == b':' && pair(3) && b[5] == b':' && pair(6) => Some(ClockShape::HourMinuteSecond),
        _ => None,
    }
}

fn is_date_shape(b: &[u8]) -> bool {
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

fn parse_iso_duration(input: &str) -> Option<NaiveTime> {
    let body = input.strip_prefix("PT")?;
    if body.is_empty() {
        return None;
    }

    let (mut hours, mut minutes, mut seconds) = (0u32, 0u32, 0u32);
    let mut digits = String::new();
    for c in body.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let value: u32 = digits.parse().ok()?;
        digits.clear();
        match c {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return None,
        }
    }
    if !digits.is_empty() {
        return None;
    }

    let total = hours.checked_mul(3600)?.checked_add(minutes.checked_mul(60)?)?.checked_add(seconds)?;
    NaiveTime::from_num_seconds_from_midnight_opt(total, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_shape_requires_two_digit_fields() {
        assert!(clock_shape("9:00").is_none());
        assert!(clock_shape("09:0").is_none());
        assert!(clock_shape("09-00").is_none());
        assert!(matches!(clock_shape("09:00"), Some(ClockShape::HourMinute)));
    }

    #[test]
    fn iso_duration_rejects_a_full_day() {
        assert!(parse_iso_duration("PT24H").is_none());
        assert!(parse_iso_duration("PT").is_none());
        assert!(parse_iso_duration("PT5").is_none());
    }
}
