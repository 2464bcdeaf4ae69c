use std::time::Duration;

use first_agent_core::tool::Error as ToolError;
use first_agent_core::{Agent, AgentBuilder};
use first_agent_tools::*;

/// The model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const NAME: &str = "root_agent";
const DESCRIPTION: &str =
    "A helpful assistant that answers questions using a set of simple tools.";

/// An assistant builder.
///
/// The assistant is an [`Agent`] preloaded with all the built-in tools and
/// a default instruction.
pub struct AssistantBuilder {
    model: String,
    instruction: Option<String>,
    tool_deadline: Option<Duration>,
}

impl AssistantBuilder {
    /// Creates a builder with the default model and instruction.
    #[inline]
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            instruction: None,
            tool_deadline: None,
        }
    }

    /// Sets the model reference.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    /// Replaces the default instruction.
    #[inline]
    pub fn with_instruction<S: Into<String>>(mut self, instruction: S) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Bounds the execution time of each tool call.
    #[inline]
    pub fn with_tool_deadline(mut self, deadline: Duration) -> Self {
        self.tool_deadline = Some(deadline);
        self
    }

    /// Builds the assistant.
    pub fn build(self) -> Result<Agent, ToolError> {
        let instruction = self.instruction.unwrap_or_else(|| {
            include_str!("./instruction.md")
                .replace("{{MODEL}}", &self.model)
                .trim()
                .to_owned()
        });

        let mut agent_builder = AgentBuilder::with_name(NAME)
            .with_model(self.model)
            .with_description(DESCRIPTION)
            .with_instruction(instruction);
        if let Some(deadline) = self.tool_deadline {
            agent_builder = agent_builder.with_tool_deadline(deadline);
        }

        agent_builder
            .with_tool(WeatherTool::new())
            .with_tool(CurrentTimeTool::new())
            .with_tool(StatisticsTool::new())
            .with_tool(StockPriceTool::new())
            .with_tool(NewsHeadlinesTool::new())
            .with_tool(TipTool::new())
            .with_tool(TemperatureTool::new())
            .with_tool(TextAnalysisTool::new())
            .with_tool(RecommendationTool::new())
            .build()
    }
}

impl Default for AssistantBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
