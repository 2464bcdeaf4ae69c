use first_agent_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::round_to;

fn default_tip_percentage() -> f64 {
    15.0
}

#[derive(Deserialize, JsonSchema)]
pub struct TipParameters {
    #[schemars(description = "The bill amount in dollars.")]
    bill_amount: f64,
    #[serde(default = "default_tip_percentage")]
    #[schemars(description = "The tip percentage, between 0 and 100.")]
    tip_percentage: f64,
}

#[derive(Serialize, JsonSchema)]
pub struct Tip {
    bill_amount: f64,
    tip_percentage: f64,
    tip_amount: f64,
    total_amount: f64,
}

/// A tool for calculating the tip and the total of a bill.
#[derive(Default)]
pub struct TipTool;

impl TipTool {
    /// Creates a new tip tool.
    #[inline]
    pub fn new() -> Self {
        TipTool
    }
}

impl Tool for TipTool {
    type Input = TipParameters;
    type Output = Tip;

    fn name(&self) -> &str {
        "calculate_tip"
    }

    fn description(&self) -> &str {
        r#"
Calculates the tip and the total amount of a bill.
The tip percentage defaults to 15. Amounts are rounded to cents."#
    }

    fn execute(&self, input: TipParameters) -> ToolResult<Tip> {
        let TipParameters {
            bill_amount,
            tip_percentage,
        } = input;
        if bill_amount < 0.0 {
            return Err(ToolError::invalid_input()
                .with_reason("Bill amount cannot be negative."));
        }
        if !(0.0..=100.0).contains(&tip_percentage) {
            return Err(ToolError::invalid_input()
                .with_reason("Tip percentage must be between 0 and 100."));
        }

        let tip_amount = bill_amount * (tip_percentage / 100.0);
        let total_amount = bill_amount + tip_amount;
        if !total_amount.is_finite() {
            return Err(ToolError::invalid_input()
                .with_reason("Bill amount is too large."));
        }
        Ok(Tip {
            bill_amount,
            tip_percentage,
            tip_amount: round_to(tip_amount, 2),
            total_amount: round_to(total_amount, 2),
        })
    }
}
