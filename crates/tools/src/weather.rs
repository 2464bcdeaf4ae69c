use first_agent_core::tool::{Tool, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::city;

const DEFAULT_REPORT: &str = "It's 90 degrees and sunny.";

#[derive(Deserialize, JsonSchema)]
pub struct WeatherParameters {
    #[schemars(description = "The city to get the weather for.")]
    city: String,
}

#[derive(Serialize, JsonSchema)]
pub struct WeatherReport {
    city: String,
    report: String,
}

/// A tool for looking up the current weather of a city.
///
/// The reports are canned: this is a stand-in for a real weather service.
#[derive(Default)]
pub struct WeatherTool;

impl WeatherTool {
    /// Creates a new weather tool.
    #[inline]
    pub fn new() -> Self {
        WeatherTool
    }
}

impl Tool for WeatherTool {
    type Input = WeatherParameters;
    type Output = WeatherReport;

    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        r#"
Gets the current weather for a city.
Returns a short, human-readable weather report."#
    }

    fn execute(&self, input: WeatherParameters) -> ToolResult<WeatherReport> {
        let report = match city::find(&input.city) {
            Some(city) => WeatherReport {
                city: city.name.to_owned(),
                report: city.weather.to_owned(),
            },
            None => WeatherReport {
                city: input.city,
                report: DEFAULT_REPORT.to_owned(),
            },
        };
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(city: &str) -> WeatherReport {
        WeatherTool::new()
            .execute(WeatherParameters {
                city: city.to_owned(),
            })
            .unwrap()
    }

    #[test]
    fn test_known_city() {
        let report = weather("sf");
        assert_eq!(report.city, "San Francisco");
        assert_eq!(report.report, "It's 60 degrees and foggy.");
    }

    #[test]
    fn test_unknown_city() {
        let report = weather("Springfield");
        assert_eq!(report.city, "Springfield");
        assert_eq!(report.report, DEFAULT_REPORT);
    }
}
