use crate::core::{Result, TaxError};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub mod tax_settings;

pub use tax_settings::TaxSettings;

const DEFAULT_TAX_SETTINGS_PATH: &str = "config/tax_types.yaml";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub tax: TaxConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// YAML file listing the configured tax types
    pub settings_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let log_format = match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(TaxError::configuration(format!(
                    "Invalid LOG_FORMAT '{}', expected 'pretty' or 'json'",
                    other
                )))
            }
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format,
            },
            tax: TaxConfig {
                settings_path: env::var("TAX_SETTINGS_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_TAX_SETTINGS_PATH)),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.log_level.trim().is_empty() {
            return Err(TaxError::configuration("LOG_LEVEL cannot be empty"));
        }

        if self.tax.settings_path.as_os_str().is_empty() {
            return Err(TaxError::configuration("TAX_SETTINGS_PATH cannot be empty"));
        }

        Ok(())
    }

    /// Read and validate the tax type settings file
    pub fn load_tax_settings(&self) -> Result<TaxSettings> {
        TaxSettings::from_file(&self.tax.settings_path)
    }
}
