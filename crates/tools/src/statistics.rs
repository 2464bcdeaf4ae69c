use first_agent_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::round_to;

#[derive(Deserialize, JsonSchema)]
pub struct StatisticsParameters {
    #[schemars(description = "The numbers to summarize. Must not be empty.")]
    numbers: Vec<f64>,
}

/// Summary statistics of a sequence of numbers.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct Statistics {
    /// Arithmetic mean, rounded to 2 decimal places.
    pub mean: f64,
    /// The central value of the sorted input, or the average of the two
    /// central values for even lengths.
    pub median: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Number of values.
    pub count: usize,
}

impl Statistics {
    /// Computes the statistics of `numbers`.
    ///
    /// Fails with `InvalidInput` if `numbers` is empty.
    pub fn of(numbers: &[f64]) -> ToolResult<Self> {
        if numbers.is_empty() {
            return Err(ToolError::invalid_input()
                .with_reason("`numbers` must contain at least one value"));
        }

        let mut sorted = numbers.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let middle = count / 2;
        let median = if count % 2 == 0 {
            sorted[middle - 1] / 2.0 + sorted[middle] / 2.0
        } else {
            sorted[middle]
        };
        // Dividing first keeps the sum finite for any finite input.
        let mean: f64 = numbers.iter().map(|x| x / count as f64).sum();

        Ok(Self {
            mean: round_to(mean, 2),
            median,
            min: sorted[0],
            max: sorted[count - 1],
            count,
        })
    }
}

/// A tool for computing summary statistics of a list of numbers.
#[derive(Default)]
pub struct StatisticsTool;

impl StatisticsTool {
    /// Creates a new statistics tool.
    #[inline]
    pub fn new() -> Self {
        StatisticsTool
    }
}

impl Tool for StatisticsTool {
    type Input = StatisticsParameters;
    type Output = Statistics;

    fn name(&self) -> &str {
        "calculate_statistics"
    }

    fn description(&self) -> &str {
        r#"
Calculates basic statistics for a list of numbers.
Returns the mean (rounded to 2 decimals), the median, the minimum, the maximum and the count."#
    }

    fn execute(&self, input: StatisticsParameters) -> ToolResult<Statistics> {
        Statistics::of(&input.numbers)
    }
}
