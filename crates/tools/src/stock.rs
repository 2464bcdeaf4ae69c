use first_agent_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

static PRICES: &[(&str, f64)] = &[
    ("AAPL", 178.50),
    ("GOOGL", 142.30),
    ("MSFT", 380.20),
    ("TSLA", 245.60),
];

#[derive(Deserialize, JsonSchema)]
pub struct StockPriceParameters {
    #[schemars(description = "The stock ticker symbol, e.g. `AAPL`.")]
    symbol: String,
}

#[derive(Serialize, JsonSchema)]
pub struct StockPrice {
    symbol: String,
    price: f64,
    currency: &'static str,
}

/// A tool for quoting stock prices from a small built-in table.
#[derive(Default)]
pub struct StockPriceTool;

impl StockPriceTool {
    /// Creates a new stock price tool.
    #[inline]
    pub fn new() -> Self {
        StockPriceTool
    }
}

impl Tool for StockPriceTool {
    type Input = StockPriceParameters;
    type Output = StockPrice;

    fn name(&self) -> &str {
        "get_stock_price"
    }

    fn description(&self) -> &str {
        r#"
Gets the current price of a stock by its ticker symbol.
Symbols are case-insensitive."#
    }

    fn execute(&self, input: StockPriceParameters) -> ToolResult<StockPrice> {
        let symbol = input.symbol.trim().to_uppercase();
        let Some(&(_, price)) = PRICES.iter().find(|(s, _)| *s == symbol) else {
            let supported: Vec<_> = PRICES.iter().map(|(s, _)| *s).collect();
            return Err(ToolError::invalid_input().with_reason(format!(
                "Sorry, I don't have price information for {}. Try {}.",
                input.symbol,
                supported.join(", ")
            )));
        };
        Ok(StockPrice {
            symbol,
            price,
            currency: "USD",
        })
    }
}
