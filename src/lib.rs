//! `WeekPeak` - weekly peak temperature lookup for a coordinate
//!
//! This library provides the core functionality for coordinate input
//! validation, weekly forecast retrieval from the OpenWeatherMap One Call
//! API, and peak-day aggregation.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod forecast;
pub mod input;
pub mod models;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use app::WeekPeakApp;
pub use config::WeekPeakConfig;
pub use error::{ValidationError, WeekPeakError};
pub use forecast::compute_weekly_peak;
pub use input::CoordinateParser;
pub use models::{Coordinate, DailyForecast, WeeklySummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeekPeakError>;
