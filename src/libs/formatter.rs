//! Formatting of shift figures for display.
//!
//! Hours are shown both as decimals (`8.50`) and clock durations (`08:30`);
//! money always carries two decimals behind the configured currency symbol.
//! A shift that follows the monthly default rate is marked `(default)` so it
//! can be told apart from an explicit override of the same value.
//!
//! ## Examples
//!
//! ```rust
//! use shiftrack::libs::formatter::{format_duration, format_money};
//!
//! assert_eq!(format_duration(2.5), "02:30");
//! assert_eq!(format_money("£", 60.0), "£60.00");
//! ```

use crate::libs::shift::Shift;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A shift with every column pre-formatted for tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedShift {
    pub id: i64,
    pub date: String,
    pub time_range: String,
    pub hours: String,
    pub rate: String,
    pub pay: String,
    pub completed: String,
}

impl FormattedShift {
    pub fn new(shift: &Shift, monthly_default: f64, currency: &str) -> Self {
        let hours = shift.hours().unwrap_or_default();
        let pay = shift.pay(monthly_default).unwrap_or_default();
        Self {
            id: shift.id,
            date: shift.date.format("%Y-%m-%d").to_string(),
            time_range: format!("{}-{}", format_clock(shift.start_time), format_clock(shift.end_time)),
            hours: format_hours(hours),
            rate: format_rate(shift, monthly_default, currency),
            pay: format_money(currency, pay),
            completed: if shift.is_completed { "✔".to_string() } else { String::new() },
        }
    }
}

/// `HH:MM` for a time of day.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Decimal hours with two places.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours.max(0.0))
}

/// Hours as an `HH:MM` duration, rounded to the nearest minute.
pub fn format_duration(hours: f64) -> String {
    // Negative totals only arise from bad data; show them as zero.
    let minutes = (hours.max(0.0) * 60.0).round() as i64;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Effective rate of a shift, marked when it comes from the monthly default.
pub fn format_rate(shift: &Shift, monthly_default: f64, currency: &str) -> String {
    let rate = format!("{}/hr", format_money(currency, shift.effective_rate(monthly_default)));
    match shift.hourly_rate {
        Some(_) => rate,
        None => format!("{} (default)", rate),
    }
}

/// Short description such as `2025-03-04 09:00-13:00`.
pub fn describe_shift(shift: &Shift) -> String {
    format!(
        "{} {}-{}",
        shift.date.format("%Y-%m-%d"),
        format_clock(shift.start_time),
        format_clock(shift.end_time)
    )
}
