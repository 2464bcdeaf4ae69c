mod builder;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tool::{Invoker, InvokerBuilder, Registry, ToolDefinition};
pub use builder::AgentBuilder;

/// Declarative configuration of an agent.
///
/// Nothing here is interpreted by the tools: the instruction and the model
/// reference are inert data handed to the orchestrator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Name of the agent.
    pub name: String,
    /// Reference to the model the orchestrator should use.
    pub model: String,
    /// A short description of what the agent does.
    #[serde(default)]
    pub description: String,
    /// The natural-language instruction shaping the agent's behavior.
    #[serde(default)]
    pub instruction: String,
    /// Execution deadline for tool calls, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_deadline_ms: Option<u64>,
}

/// An agent definition: its configuration bound to a set of tools.
///
/// The agent doesn't talk to any model. It gives the orchestrator what it
/// needs to do so (the instruction and the tool definitions), and an
/// [`Invoker`] to carry out the tool calls the model asks for.
pub struct Agent {
    config: AgentConfig,
    registry: Arc<Registry>,
}

impl Agent {
    /// Returns the configuration of the agent.
    #[inline]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Returns the name of the agent.
    #[inline]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the model reference.
    #[inline]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Returns the instruction.
    #[inline]
    pub fn instruction(&self) -> &str {
        &self.config.instruction
    }

    /// Returns the tools of the agent.
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the tool definitions to advertise to the model.
    #[inline]
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    /// Creates an invoker for the tools of this agent.
    pub fn invoker(&self) -> Invoker {
        let mut builder = InvokerBuilder::with_registry(Arc::clone(&self.registry));
        if let Some(millis) = self.config.tool_deadline_ms {
            builder = builder.with_deadline(Duration::from_millis(millis));
        }
        builder.build()
    }
}

impl Agent {
    fn from_builder(config: AgentConfig, registry: Registry) -> Self {
        debug!(
            "built agent `{}` with {} tool(s)",
            config.name,
            registry.len()
        );
        Self {
            config,
            registry: Arc::new(registry),
        }
    }
}
