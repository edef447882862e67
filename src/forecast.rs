//! Weekly forecast aggregation
//!
//! Scans the ordered daily sequence for the hottest day of the week and
//! renders the result for display. Pure computation, no I/O.

use crate::models::{DailyForecast, WeeklySummary};

/// Find the day with the highest maximum temperature across the sequence
///
/// Ties in temperature are broken by humidity: the candidate with the
/// strictly higher humidity wins, otherwise the earlier day is kept. The
/// running maximum starts at 0 K, so an empty sequence yields the
/// zero-initialized summary (offset 0, humidity 0, -459.7 F).
#[must_use]
pub fn compute_weekly_peak(days: &[DailyForecast]) -> WeeklySummary {
    let mut peak_temperature_kelvin = 0.0_f64;
    let mut peak_humidity_percent = 0_u8;
    let mut day_offset = 0_usize;

    for (i, day) in days.iter().enumerate() {
        // Exact equality is the tie condition
        if day.max_temperature_kelvin == peak_temperature_kelvin
            && day.humidity_percent > peak_humidity_percent
        {
            peak_humidity_percent = day.humidity_percent;
            day_offset = i;
        } else if day.max_temperature_kelvin > peak_temperature_kelvin {
            peak_temperature_kelvin = day.max_temperature_kelvin;
            peak_humidity_percent = day.humidity_percent;
            day_offset = i;
        }
    }

    WeeklySummary {
        peak_temperature_fahrenheit: format_one_decimal(kelvin_to_fahrenheit(
            peak_temperature_kelvin,
        )),
        peak_humidity_percent,
        day_offset,
    }
}

/// Convert degrees Kelvin to Fahrenheit
#[must_use]
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - 273.15) * 9.0 / 5.0 + 32.0
}

/// Render with at most one fractional digit, rounding half-up
///
/// A trailing `.0` is dropped, so 32.0 renders as `"32"`.
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    let scaled = (value * 10.0).round();
    if scaled % 10.0 == 0.0 {
        format!("{}", scaled / 10.0)
    } else {
        format!("{:.1}", scaled / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day(max_temperature_kelvin: f64, humidity_percent: u8) -> DailyForecast {
        DailyForecast {
            max_temperature_kelvin,
            humidity_percent,
        }
    }

    #[test]
    fn test_single_day_freezing_point() {
        let summary = compute_weekly_peak(&[day(273.15, 50)]);

        assert_eq!(summary.peak_temperature_fahrenheit, "32");
        assert_eq!(summary.peak_humidity_percent, 50);
        assert_eq!(summary.day_offset, 0);
    }

    #[test]
    fn test_peak_day_selected() {
        let days = [day(295.0, 70), day(303.15, 55), day(299.9, 80)];
        let summary = compute_weekly_peak(&days);

        assert_eq!(summary.day_offset, 1);
        assert_eq!(summary.peak_humidity_percent, 55);
        // (303.15 - 273.15) * 9/5 + 32 = 86
        assert_eq!(summary.peak_temperature_fahrenheit, "86");
    }

    #[test]
    fn test_tie_broken_by_humidity() {
        let days = [day(300.0, 40), day(310.0, 30), day(310.0, 60)];
        let summary = compute_weekly_peak(&days);

        assert_eq!(summary.day_offset, 2);
        assert_eq!(summary.peak_humidity_percent, 60);
        // (310 - 273.15) * 9/5 + 32 = 98.33
        assert_eq!(summary.peak_temperature_fahrenheit, "98.3");
    }

    // The higher-humidity day wins a temperature tie regardless of order
    #[rstest]
    #[case(&[day(310.0, 30), day(310.0, 60)], 1, 60)]
    #[case(&[day(310.0, 60), day(310.0, 30)], 0, 60)]
    #[case(&[day(310.0, 45), day(310.0, 45)], 0, 45)]
    fn test_tie_break_order_independence(
        #[case] days: &[DailyForecast],
        #[case] expected_offset: usize,
        #[case] expected_humidity: u8,
    ) {
        let summary = compute_weekly_peak(days);
        assert_eq!(summary.day_offset, expected_offset);
        assert_eq!(summary.peak_humidity_percent, expected_humidity);
    }

    #[test]
    fn test_empty_sequence_yields_sentinel() {
        let summary = compute_weekly_peak(&[]);

        assert_eq!(summary.day_offset, 0);
        assert_eq!(summary.peak_humidity_percent, 0);
        assert_eq!(summary.peak_temperature_fahrenheit, "-459.7");
    }

    #[test]
    fn test_idempotent() {
        let days = [day(290.0, 80), day(301.5, 65), day(301.5, 90)];

        let first = compute_weekly_peak(&days);
        let second = compute_weekly_peak(&days);
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(273.15, "32")]
    #[case(310.0, "98.3")]
    #[case(0.0, "-459.7")]
    #[case(300.0, "80.3")]
    fn test_kelvin_to_fahrenheit_rendering(#[case] kelvin: f64, #[case] expected: &str) {
        assert_eq!(format_one_decimal(kelvin_to_fahrenheit(kelvin)), expected);
    }

    #[rstest]
    #[case(32.0, "32")]
    #[case(32.04, "32")]
    #[case(98.33, "98.3")]
    #[case(98.37, "98.4")]
    #[case(-459.67, "-459.7")]
    #[case(0.0, "0")]
    fn test_format_one_decimal(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_one_decimal(value), expected);
    }
}
