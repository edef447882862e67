//! Weather API client for the OpenWeatherMap One Call endpoint
//!
//! Blocking HTTP client used to retrieve the week-long forecast for a
//! coordinate. One request per user action; every failure is terminal
//! for the current request and surfaced to the caller without retry.

use crate::config::WeekPeakConfig;
use crate::error::WeekPeakError;
use crate::models::openweather::OneCallResponse;
use crate::models::{Coordinate, DailyForecast};
use crate::Result;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Weather API client for OpenWeatherMap
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// Base URL for the weather API
    base_url: String,
    /// API key required by OpenWeatherMap
    api_key: String,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &WeekPeakConfig) -> Result<Self> {
        let api_key = config
            .weather
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                WeekPeakError::config(
                    "OpenWeatherMap API key is required. Set weather.api_key in the config file or the OPENWEATHERMAP_API_KEY environment variable.",
                )
            })?;

        let timeout = Duration::from_secs(config.weather.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weekpeak/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.weather.base_url.clone(),
            api_key,
        })
    }

    /// Retrieve the week-long daily forecast for a coordinate
    ///
    /// Minutely and hourly blocks are excluded at request time; the call
    /// blocks until the response arrives or the configured timeout fires.
    pub fn fetch_weekly_forecast(&self, coordinate: &Coordinate) -> Result<Vec<DailyForecast>> {
        info!(
            "Fetching weekly forecast for coordinates: {}",
            coordinate.format_coordinates()
        );
        let start_time = Instant::now();

        let url = format!(
            "{}/data/2.5/onecall?lat={}&lon={}&exclude=minutely,hourly&appid={}",
            self.base_url, coordinate.latitude, coordinate.longitude, self.api_key
        );

        debug!(
            "One Call request URL: {}",
            url.split("appid=").next().unwrap_or(&url)
        );

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        let status = response.status();
        debug!(
            "One Call response received: {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        let body = response.text()?;

        if !status.is_success() {
            warn!("One Call request failed with status {status}");
            return Err(WeekPeakError::api(body));
        }

        let parse_start = Instant::now();
        let payload: OneCallResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse One Call response: {e}");
            WeekPeakError::parse(e.to_string())
        })?;
        let days = payload.into_daily_forecasts();

        let parse_duration = parse_start.elapsed();
        let total_duration = start_time.elapsed();

        info!(
            "Retrieved {} forecast day(s) in {:.3}s (parse: {:.3}s)",
            days.len(),
            total_duration.as_secs_f64(),
            parse_duration.as_secs_f64()
        );

        if total_duration.as_secs() > 5 {
            warn!(
                "Slow API response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(days)
    }
}
