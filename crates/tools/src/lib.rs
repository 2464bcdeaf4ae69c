//! A set of built-in tools that models can use.
//!
//! All of them are deterministic, except [`CurrentTimeTool`] which reads a
//! clock.

#![deny(missing_docs)]

mod city;
mod news;
mod recommendation;
mod statistics;
mod stock;
mod temperature;
mod text;
mod time;
mod tip;
mod weather;

pub use news::NewsHeadlinesTool;
pub use recommendation::RecommendationTool;
pub use statistics::{Statistics, StatisticsTool};
pub use stock::StockPriceTool;
pub use temperature::{TemperatureTool, TemperatureUnit};
pub use text::TextAnalysisTool;
pub use time::CurrentTimeTool;
pub use tip::TipTool;
pub use weather::WeatherTool;

/// Rounds `value` to the given number of decimal places.
///
/// Values too large to be scaled are returned as is; they have no
/// fractional digits to round anyway.
#[inline]
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.40625, 2), 1.41);
        assert_eq!(round_to(-2.345, 1), -2.3);
        assert_eq!(round_to(1e307, 2), 1e307);
        assert_eq!(round_to(-f64::MAX, 2), -f64::MAX);
    }
}
