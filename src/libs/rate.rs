//! Hourly rate validation and resolution.
//!
//! A shift either carries its own hourly rate or follows the default rate of
//! the month it falls in. Blank rate input is the way a user asks to follow
//! the monthly default, so it parses to `None` rather than zero.
//!
//! Every rate that enters the data model, per-shift or monthly, must lie in
//! `[MIN_RATE, MAX_RATE]`. Values outside the range are rejected, never
//! clamped.

use crate::libs::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest accepted hourly rate.
pub const MIN_RATE: f64 = 1.0;
/// Highest accepted hourly rate.
pub const MAX_RATE: f64 = 1000.0;

/// An hourly rate that has passed range validation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct HourlyRate(f64);

impl HourlyRate {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() {
            return Err(ValidationError::InvalidRate(value.to_string()));
        }
        if !(MIN_RATE..=MAX_RATE).contains(&value) {
            return Err(ValidationError::RateOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for HourlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for HourlyRate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rate(s)
    }
}

impl<'de> Deserialize<'de> for HourlyRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        HourlyRate::new(value).map_err(serde::de::Error::custom)
    }
}

/// Parses a required rate, e.g. the monthly default.
pub fn parse_rate(input: &str) -> Result<HourlyRate, ValidationError> {
    let trimmed = input.trim();
    let value: f64 = trimmed.parse().map_err(|_| ValidationError::InvalidRate(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidRate(trimmed.to_string()));
    }
    HourlyRate::new(value)
}

/// Parses a per-shift rate where blank input means "use the monthly default".
pub fn parse_optional_rate(input: &str) -> Result<Option<HourlyRate>, ValidationError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_rate(input).map(Some)
}

/// Returns the rate used for pay: the shift's own rate when set, otherwise
/// the month's default.
pub fn effective_rate(per_shift: Option<f64>, monthly_default: f64) -> f64 {
    per_shift.unwrap_or(monthly_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(HourlyRate::new(1.0).is_ok());
        assert!(HourlyRate::new(1000.0).is_ok());
        assert_eq!(HourlyRate::new(0.99), Err(ValidationError::RateOutOfRange(0.99)));
        assert!(HourlyRate::new(f64::NAN).is_err());
    }

    #[test]
    fn infinite_text_is_not_a_rate() {
        assert!(matches!(parse_rate("inf"), Err(ValidationError::InvalidRate(_))));
    }
}
