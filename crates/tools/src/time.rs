use chrono::{DateTime, Utc};
use first_agent_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::city;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";

#[derive(Deserialize, JsonSchema)]
pub struct CurrentTimeParameters {
    #[schemars(description = "The city to get the current time for.")]
    city: String,
}

#[derive(Serialize, JsonSchema)]
pub struct CurrentTime {
    city: String,
    timezone: String,
    time: String,
}

/// A tool for telling the current local time of a city.
pub struct CurrentTimeTool {
    clock: fn() -> DateTime<Utc>,
}

impl CurrentTimeTool {
    /// Creates a new time tool reading the system clock.
    #[inline]
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Creates a time tool reading the given clock.
    #[inline]
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        CurrentTimeTool { clock }
    }
}

impl Default for CurrentTimeTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CurrentTimeTool {
    type Input = CurrentTimeParameters;
    type Output = CurrentTime;

    fn name(&self) -> &str {
        "get_current_time"
    }

    fn description(&self) -> &str {
        r#"
Gets the current local time in a city.
Only cities with known timezone information are supported."#
    }

    fn execute(&self, input: CurrentTimeParameters) -> ToolResult<CurrentTime> {
        let Some(city) = city::find(&input.city) else {
            return Err(ToolError::invalid_input().with_reason(format!(
                "Sorry, I don't have timezone information for {}.",
                input.city
            )));
        };

        let now = (self.clock)().with_timezone(&city.timezone);
        Ok(CurrentTime {
            city: city.name.to_owned(),
            timezone: city.timezone.name().to_owned(),
            time: now.format(TIME_FORMAT).to_string(),
        })
    }
}
