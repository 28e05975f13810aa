//! HTTP client for the shift service.
//!
//! Wraps a `reqwest` client and maps every non-success response to a
//! [`ShiftError::RequestFailure`] that includes the response body, so the
//! user sees whatever explanation the service gave.

use super::{MonthlyRateInput, ShiftService, ShiftsResponse};
use crate::libs::config::ConfigModule;
use crate::libs::error::ShiftError;
use crate::libs::messages::Message;
use crate::libs::month::YearMonth;
use crate::libs::rate::HourlyRate;
use crate::libs::shift::{Shift, ShiftInput};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Default service location used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5137";

const LOAD_SHIFTS: &str = "Load shifts";
const ADD_SHIFT: &str = "Add shift";
const UPDATE_SHIFT: &str = "Update shift";
const UPDATE_COMPLETION: &str = "Update completion";
const SAVE_MONTHLY_RATE: &str = "Save monthly rate";
const DELETE_SHIFT: &str = "Delete shift";

/// Client for a shift service instance.
#[derive(Debug, Clone)]
pub struct ShiftsApi {
    client: Client,
    config: ShiftServerConfig,
}

impl ShiftsApi {
    pub fn new(config: &ShiftServerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Sends a request and turns non-success statuses into errors.
    async fn send(&self, action: &str, request: RequestBuilder) -> Result<Response, ShiftError> {
        let response = request
            .send()
            .await
            .map_err(|e| ShiftError::request(action, None, e.to_string()))?;

        let status = response.status();
        tracing::debug!(action, status = status.as_u16(), "shift service responded");
        if status.is_success() {
            return Ok(response);
        }

        let detail = response.text().await.unwrap_or_default();
        Err(ShiftError::request(action, Some(status.as_u16()), detail))
    }

    async fn decode<T: DeserializeOwned>(action: &str, response: Response) -> Result<T, ShiftError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ShiftError::request(action, None, format!("unreadable response: {}", e)))
    }
}

impl ShiftService for ShiftsApi {
    async fn fetch_month(&self, month: YearMonth) -> Result<ShiftsResponse, ShiftError> {
        let url = self.url(&format!("shifts?month={}", month));
        tracing::debug!(%url, "fetching month");
        let response = self.send(LOAD_SHIFTS, self.client.get(&url)).await?;
        Self::decode(LOAD_SHIFTS, response).await
    }

    async fn create_shift(&self, input: &ShiftInput) -> Result<Shift, ShiftError> {
        let url = self.url("shifts");
        let response = self.send(ADD_SHIFT, self.client.post(&url).json(input)).await?;
        Self::decode(ADD_SHIFT, response).await
    }

    async fn update_shift(&self, id: i64, input: &ShiftInput) -> Result<Shift, ShiftError> {
        let url = self.url(&format!("shifts/{}", id));
        let response = self.send(UPDATE_SHIFT, self.client.put(&url).json(input)).await?;
        Self::decode(UPDATE_SHIFT, response).await
    }

    async fn set_completed(&self, id: i64, completed: bool) -> Result<(), ShiftError> {
        let url = self.url(&format!("shifts/{}/completed", id));
        self.send(UPDATE_COMPLETION, self.client.patch(&url).json(&completed)).await?;
        Ok(())
    }

    async fn set_monthly_rate(&self, month: YearMonth, rate: HourlyRate) -> Result<(), ShiftError> {
        let url = self.url(&format!("monthly-rate?month={}", month));
        let body = MonthlyRateInput { hourly_rate: rate };
        self.send(SAVE_MONTHLY_RATE, self.client.put(&url).json(&body)).await?;
        Ok(())
    }

    async fn delete_shift(&self, id: i64) -> Result<(), ShiftError> {
        // 204 and any other 2xx count as success; the body is ignored.
        let url = self.url(&format!("shifts/{}", id));
        self.send(DELETE_SHIFT, self.client.delete(&url)).await?;
        Ok(())
    }
}

/// Connection settings for the shift service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShiftServerConfig {
    /// Base URL of the service, without a trailing path.
    ///
    /// Example: `http://localhost:5137`
    pub api_url: String,
}

impl Default for ShiftServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ShiftServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Shift service".to_string(),
        }
    }

    /// Prompts for the service URL, offering the current value as default.
    pub fn init(config: &Option<ShiftServerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleServer);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
