//! One Call API response structures and conversion utilities

use serde::Deserialize;

use super::forecast::DailyForecast;

/// Week-long forecast response from the One Call endpoint
///
/// Only the `daily` array is consumed; minutely and hourly blocks are
/// excluded at request time and all other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct OneCallResponse {
    pub daily: Vec<DailyEntry>,
}

/// One element of the One Call `daily` array
#[derive(Debug, Deserialize)]
pub struct DailyEntry {
    pub temp: DailyTemperature,
    pub humidity: u8,
}

/// Temperature block of a daily entry; the API reports Kelvin by default
#[derive(Debug, Deserialize)]
pub struct DailyTemperature {
    pub max: f64,
}

impl OneCallResponse {
    /// Flatten the response into the ordered daily sequence
    #[must_use]
    pub fn into_daily_forecasts(self) -> Vec<DailyForecast> {
        self.daily
            .into_iter()
            .map(|day| DailyForecast {
                max_temperature_kelvin: day.temp.max,
                humidity_percent: day.humidity,
            })
            .collect()
    }
}
