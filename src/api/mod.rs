//! Remote shift service interface.
//!
//! All persistence lives behind a shift service reached over HTTP. The
//! controller talks to it only through the [`ShiftService`] trait, which
//! keeps the reconciliation logic independent of the transport and lets
//! tests substitute an in-memory service.
//!
//! ## Endpoints
//!
//! | Operation            | Request                               |
//! |----------------------|---------------------------------------|
//! | Month collection     | `GET /shifts?month=YYYY-MM`           |
//! | Create               | `POST /shifts`                        |
//! | Full replace         | `PUT /shifts/{id}`                    |
//! | Completion toggle    | `PATCH /shifts/{id}/completed`        |
//! | Monthly default rate | `PUT /monthly-rate?month=YYYY-MM`     |
//! | Delete               | `DELETE /shifts/{id}`                 |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftrack::api::{ShiftService, ShiftsApi, ShiftServerConfig};
//! use shiftrack::libs::month::YearMonth;
//!
//! # async fn run() -> Result<(), shiftrack::libs::error::ShiftError> {
//! let api = ShiftsApi::new(&ShiftServerConfig::default());
//! let month = api.fetch_month(YearMonth::current()).await?;
//! println!("{} shifts", month.shifts.len());
//! # Ok(())
//! # }
//! ```

use crate::libs::error::ShiftError;
use crate::libs::month::YearMonth;
use crate::libs::rate::HourlyRate;
use crate::libs::shift::{Shift, ShiftInput};
use serde::{Deserialize, Serialize};

pub mod shifts;

pub use shifts::{ShiftServerConfig, ShiftsApi};

/// Month collection as returned by `GET /shifts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftsResponse {
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub total_pay: f64,
    #[serde(default)]
    pub monthly_default_rate: f64,
}

/// Body for `PUT /monthly-rate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRateInput {
    pub hourly_rate: HourlyRate,
}

/// Operations offered by the remote shift service.
///
/// Implementations report non-success statuses and transport failures as
/// [`ShiftError::RequestFailure`], carrying whatever error text the service
/// returned.
#[allow(async_fn_in_trait)]
pub trait ShiftService {
    /// Loads every shift of `month` together with the month's totals and
    /// default rate.
    async fn fetch_month(&self, month: YearMonth) -> Result<ShiftsResponse, ShiftError>;

    /// Creates a shift and returns it with its assigned id and derived fields.
    async fn create_shift(&self, input: &ShiftInput) -> Result<Shift, ShiftError>;

    /// Replaces shift `id` and returns the stored record.
    async fn update_shift(&self, id: i64, input: &ShiftInput) -> Result<Shift, ShiftError>;

    async fn set_completed(&self, id: i64, completed: bool) -> Result<(), ShiftError>;

    async fn set_monthly_rate(&self, month: YearMonth, rate: HourlyRate) -> Result<(), ShiftError>;

    async fn delete_shift(&self, id: i64) -> Result<(), ShiftError>;
}
