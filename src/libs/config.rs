//! Configuration management for shiftrack.
//!
//! Settings are stored as pretty-printed JSON in the application data
//! directory (see [`DataStorage`]). Every section is optional; a missing file
//! or section falls back to defaults, so shiftrack works against a local
//! shift service at `http://localhost:5137` without any setup.
//!
//! ## Sections
//!
//! - **server**: where the shift service lives
//! - **display**: how money is shown
//!
//! The `SHIFTRACK_API_URL` environment variable overrides the configured
//! service URL for a single run.
//!
//! ```rust,no_run
//! use shiftrack::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Using {}", config.server_config().api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::shifts::ShiftServerConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides `server.api_url`.
pub const API_URL_ENV: &str = "SHIFTRACK_API_URL";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used to route the wizard to the section's setup
    pub key: String,
    /// Name shown to the user
    pub name: String,
}

/// Presentation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Symbol printed in front of money amounts.
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { currency: "£".to_string() }
    }
}

impl DisplayConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "display".to_string(),
            name: "Display".to_string(),
        }
    }

    pub fn init(config: &Option<DisplayConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleDisplay);
        Ok(Self {
            currency: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCurrency.to_string())
                .default(config.currency)
                .interact_text()?,
        })
    }
}

/// Root configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ShiftServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Loads the configuration file, or defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration file, replacing any previous one.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective service settings: the configured ones (or defaults) with
    /// the `SHIFTRACK_API_URL` override applied.
    pub fn server_config(&self) -> ShiftServerConfig {
        let mut server = self.server.clone().unwrap_or_default();
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                server.api_url = url.trim().to_string();
            }
        }
        server
    }

    pub fn display_config(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![ShiftServerConfig::module(), DisplayConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => config.server = Some(ShiftServerConfig::init(&config.server)?),
                "display" => config.display = Some(DisplayConfig::init(&config.display)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
