use std::fmt::{self, Display};

use first_agent_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::round_to;

const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// A temperature unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    C,
    /// Degrees Fahrenheit.
    F,
    /// Kelvin.
    K,
}

impl TemperatureUnit {
    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::C => value,
            Self::F => (value - 32.0) * 5.0 / 9.0,
            Self::K => value + ABSOLUTE_ZERO_CELSIUS,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::C => celsius,
            Self::F => celsius * 9.0 / 5.0 + 32.0,
            Self::K => celsius - ABSOLUTE_ZERO_CELSIUS,
        }
    }
}

impl Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C => write!(f, "°C"),
            Self::F => write!(f, "°F"),
            Self::K => write!(f, "K"),
        }
    }
}

#[derive(Deserialize, JsonSchema)]
pub struct TemperatureParameters {
    #[schemars(description = "The temperature value to convert.")]
    value: f64,
    #[schemars(description = "The source unit: C, F or K.")]
    from_unit: TemperatureUnit,
    #[schemars(description = "The target unit: C, F or K.")]
    to_unit: TemperatureUnit,
}

#[derive(Serialize, JsonSchema)]
pub struct TemperatureConversion {
    value: f64,
    from_unit: TemperatureUnit,
    to_unit: TemperatureUnit,
    result: f64,
}

/// A tool for converting temperatures between Celsius, Fahrenheit and
/// Kelvin.
#[derive(Default)]
pub struct TemperatureTool;

impl TemperatureTool {
    /// Creates a new temperature conversion tool.
    #[inline]
    pub fn new() -> Self {
        TemperatureTool
    }
}

impl Tool for TemperatureTool {
    type Input = TemperatureParameters;
    type Output = TemperatureConversion;

    fn name(&self) -> &str {
        "convert_temperature"
    }

    fn description(&self) -> &str {
        r#"
Converts a temperature between Celsius (C), Fahrenheit (F) and Kelvin (K).
The result is rounded to 2 decimal places."#
    }

    fn execute(
        &self,
        input: TemperatureParameters,
    ) -> ToolResult<TemperatureConversion> {
        let celsius = input.from_unit.to_celsius(input.value);
        // Allow for the rounding error of the conversion itself.
        if celsius < ABSOLUTE_ZERO_CELSIUS - 1e-9 {
            return Err(ToolError::invalid_input().with_reason(format!(
                "{}{} is below absolute zero",
                input.value, input.from_unit
            )));
        }

        Ok(TemperatureConversion {
            value: input.value,
            from_unit: input.from_unit,
            to_unit: input.to_unit,
            result: round_to(input.to_unit.from_celsius(celsius), 2),
        })
    }
}
