//! Shift records, validated shift input and the request body sent to the
//! shift service.
//!
//! A [`Shift`] is what the service returns: raw fields plus the derived
//! `total_hours`, `effective_hourly_rate` and `pay`. The derived fields are
//! authoritative when present; the accessors below only compute them
//! locally when the service left them out.
//!
//! A [`ShiftDraft`] is user input that has passed validation. It can only be
//! built through [`ShiftDraft::parse`] or [`ShiftDraft::from_shift`], so a
//! request built from a draft never carries a malformed date, time or rate.

use crate::libs::error::ValidationError;
use crate::libs::rate::{self, HourlyRate};
use crate::libs::time;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A recorded work period as held by the shift store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Server-assigned identifier, `0` until persisted.
    #[serde(default)]
    pub id: i64,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    #[serde(with = "wire_time")]
    pub start_time: NaiveTime,
    #[serde(with = "wire_time")]
    pub end_time: NaiveTime,
    /// Per-shift override; `None` follows the monthly default.
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay: Option<f64>,
}

impl Shift {
    /// Worked hours, preferring the service's figure.
    pub fn hours(&self) -> Result<f64, ValidationError> {
        match self.total_hours {
            Some(hours) => Ok(hours),
            None => time::duration_hours(self.start_time, self.end_time),
        }
    }

    /// Rate used for pay, preferring the service's resolved rate.
    pub fn effective_rate(&self, monthly_default: f64) -> f64 {
        self.effective_hourly_rate
            .unwrap_or_else(|| rate::effective_rate(self.hourly_rate, monthly_default))
    }

    /// Pay for the shift, preferring the service's figure.
    pub fn pay(&self, monthly_default: f64) -> Result<f64, ValidationError> {
        match self.pay {
            Some(pay) => Ok(pay),
            None => Ok(self.hours()? * self.effective_rate(monthly_default)),
        }
    }

    /// Returns the shift with every derived field filled in.
    pub fn resolved(mut self, monthly_default: f64) -> Result<Self, ValidationError> {
        let hours = self.hours()?;
        let effective = self.effective_rate(monthly_default);
        let pay = self.pay.unwrap_or(hours * effective);
        self.total_hours = Some(hours);
        self.effective_hourly_rate = Some(effective);
        self.pay = Some(pay);
        Ok(self)
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// Validated input for creating or replacing a shift.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftDraft {
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    hourly_rate: Option<HourlyRate>,
    is_completed: bool,
}

impl ShiftDraft {
    /// Validates raw form input. A blank `rate` means "use the monthly
    /// default".
    pub fn parse(date: &str, start: &str, end: &str, rate: &str) -> Result<Self, ValidationError> {
        let date = time::parse_date(date)?;
        let start_time = time::parse_time_of_day(start)?;
        let end_time = time::parse_time_of_day(end)?;
        let hourly_rate = rate::parse_optional_rate(rate)?;
        Self::new(date, start_time, end_time, hourly_rate)
    }

    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        hourly_rate: Option<HourlyRate>,
    ) -> Result<Self, ValidationError> {
        time::duration_hours(start_time, end_time)?;
        Ok(Self {
            date,
            start_time,
            end_time,
            hourly_rate,
            is_completed: false,
        })
    }

    /// Starts an edit from a stored shift, re-validating its fields.
    pub fn from_shift(shift: &Shift) -> Result<Self, ValidationError> {
        let hourly_rate = shift.hourly_rate.map(HourlyRate::new).transpose()?;
        let draft = Self::new(shift.date, shift.start_time, shift.end_time, hourly_rate)?;
        Ok(draft.completed(shift.is_completed))
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Replaces both times, keeping the end-after-start rule.
    pub fn with_times(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Result<Self, ValidationError> {
        time::duration_hours(start_time, end_time)?;
        self.start_time = start_time;
        self.end_time = end_time;
        Ok(self)
    }

    pub fn with_rate(mut self, hourly_rate: Option<HourlyRate>) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn hourly_rate(&self) -> Option<HourlyRate> {
        self.hourly_rate
    }

    /// Body for `POST /shifts`.
    pub fn to_create_input(&self) -> ShiftInput {
        ShiftInput {
            id: None,
            date: time::format_wire_date(self.date),
            start_time: time::format_time(self.start_time),
            end_time: time::format_time(self.end_time),
            hourly_rate: self.hourly_rate.map(HourlyRate::value),
            is_completed: None,
        }
    }

    /// Body for `PUT /shifts/{id}`.
    pub fn to_update_input(&self, id: i64) -> ShiftInput {
        ShiftInput {
            id: Some(id),
            is_completed: Some(self.is_completed),
            ..self.to_create_input()
        }
    }
}

/// Request body for creating or replacing a shift.
///
/// `hourly_rate` is always serialized, as `null` when the shift follows the
/// monthly default, so the service can tell "no override" from zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

mod wire_date {
    use crate::libs::time;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        time::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

mod wire_time {
    use crate::libs::time;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time::format_time(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        time::parse_time_of_day(&raw).map_err(serde::de::Error::custom)
    }
}
