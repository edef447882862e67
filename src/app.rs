//! Application state and the submit flow
//!
//! The presentation layer constructs one `WeekPeakApp` at startup and
//! calls [`WeekPeakApp::handle_submit`] per user action. This is the
//! request/response seam that replaces the original event-driven GUI
//! handler; no state lives outside the struct.

use crate::api::WeatherApiClient;
use crate::config::WeekPeakConfig;
use crate::forecast::compute_weekly_peak;
use crate::input::CoordinateParser;
use crate::models::WeeklySummary;
use crate::Result;
use tracing::debug;

/// Application state owned by the presentation layer
pub struct WeekPeakApp {
    /// Client used to send the One Call request
    client: WeatherApiClient,
}

impl WeekPeakApp {
    /// Build the application from loaded configuration
    pub fn new(config: &WeekPeakConfig) -> Result<Self> {
        Ok(Self {
            client: WeatherApiClient::new(config)?,
        })
    }

    /// Validate input, fetch the weekly forecast, and compute the peak day
    ///
    /// The whole flow is synchronous: the call blocks until the summary is
    /// ready or an error aborts the request.
    pub fn handle_submit(&self, raw: &str) -> Result<WeeklySummary> {
        let coordinate = CoordinateParser::parse(raw)?;
        debug!("Parsed coordinate: {}", coordinate.format_coordinates());

        let days = self.client.fetch_weekly_forecast(&coordinate)?;

        Ok(compute_weekly_peak(&days))
    }
}
