//! Forecast data model and display methods

use serde::{Deserialize, Serialize};

/// One day of forecast data; sequence position == day offset from today
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct DailyForecast {
    /// Daily maximum temperature in Kelvin
    pub max_temperature_kelvin: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_percent: u8,
}

/// Peak-day summary derived from a weekly forecast
///
/// Computed once per request and discarded after rendering, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySummary {
    /// Peak temperature in Fahrenheit, at most one fractional digit
    pub peak_temperature_fahrenheit: String,
    /// Humidity on the peak day
    pub peak_humidity_percent: u8,
    /// Days from today until the peak day (0 == today)
    pub day_offset: usize,
}

impl WeeklySummary {
    /// Render the user-facing summary line
    #[must_use]
    pub fn display_message(&self) -> String {
        format!(
            "A weekly high of {} degrees Fahrenheit with {}% humidity will occur in {} day(s)",
            self.peak_temperature_fahrenheit, self.peak_humidity_percent, self.day_offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message() {
        let summary = WeeklySummary {
            peak_temperature_fahrenheit: "98.3".to_string(),
            peak_humidity_percent: 60,
            day_offset: 2,
        };

        assert_eq!(
            summary.display_message(),
            "A weekly high of 98.3 degrees Fahrenheit with 60% humidity will occur in 2 day(s)"
        );
    }
}
