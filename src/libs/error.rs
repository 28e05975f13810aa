//! Error types shared by the shift engine and the remote service client.
//!
//! Two layers are distinguished:
//!
//! - [`ValidationError`] is raised locally, before any request is issued.
//!   Nothing in the shift store changes when one is returned.
//! - [`ShiftError`] wraps validation failures and adds the remote and
//!   controller failures (`RequestFailure`, `MutationInFlight`, `UnknownShift`).
//!
//! Stale fetch responses are not errors at all; see
//! [`FetchOutcome`](crate::libs::controller::FetchOutcome).

use crate::libs::rate::{MAX_RATE, MIN_RATE};
use thiserror::Error;

/// Local input validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}', expected HH:mm or HH:mm:ss")]
    InvalidTime(String),

    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid hourly rate '{0}'")]
    InvalidRate(String),

    #[error("Hourly rate {0} is outside the allowed range {min}-{max}", min = MIN_RATE, max = MAX_RATE)]
    RateOutOfRange(f64),

    #[error("End time {end} is before start time {start}")]
    EndBeforeStart { start: String, end: String },
}

/// Failure of a shift operation.
#[derive(Debug, Error)]
pub enum ShiftError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-success status or transport error from the shift service.
    #[error("{action} failed{}", describe_failure(.status, .detail))]
    RequestFailure {
        action: String,
        status: Option<u16>,
        detail: String,
    },

    #[error("Shift {0} still has a change in progress")]
    MutationInFlight(i64),

    #[error("Shift {0} is not loaded for the selected month")]
    UnknownShift(i64),
}

impl ShiftError {
    pub fn request(action: &str, status: Option<u16>, detail: impl Into<String>) -> Self {
        ShiftError::RequestFailure {
            action: action.to_string(),
            status,
            detail: detail.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ShiftError::Validation(_))
    }
}

fn describe_failure(status: &Option<u16>, detail: &str) -> String {
    match (*status, detail.trim()) {
        (Some(code), "") => format!(" ({})", code),
        (Some(code), text) => format!(" ({}): {}", code, text),
        (None, "") => String::new(),
        (None, text) => format!(": {}", text),
    }
}
