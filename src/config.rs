//! Configuration management for the `WeekPeak` application
//!
//! Handles loading configuration from an optional TOML file and
//! environment variables, and provides validation for all settings.

use crate::error::WeekPeakError;
use crate::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `WeekPeak` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekPeakConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_weather_timeout() -> u32 {
    // The upstream request blocks for at most two minutes
    120
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for WeekPeakConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl WeekPeakConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    ///
    /// A missing file is not an error; environment variables with the
    /// `WEEKPEAK_` prefix override file values (section and key separated
    /// by `__`, e.g. `WEEKPEAK_WEATHER__API_KEY`).
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("WEEKPEAK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| WeekPeakError::config(format!("Failed to build configuration: {e}")))?;

        let config: WeekPeakConfig = settings.try_deserialize().map_err(|e| {
            WeekPeakError::config(format!("Failed to deserialize configuration: {e}"))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weekpeak").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.is_empty() {
                return Err(WeekPeakError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key.",
                ));
            }
        }

        if self.weather.timeout_seconds == 0 {
            return Err(WeekPeakError::config(
                "Weather API timeout cannot be zero seconds",
            ));
        }

        if self.weather.timeout_seconds > 300 {
            return Err(WeekPeakError::config(
                "Weather API timeout cannot exceed 300 seconds",
            ));
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(WeekPeakError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            ));
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeekPeakError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        Ok(())
    }
}
