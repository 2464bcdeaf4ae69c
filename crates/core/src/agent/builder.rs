use std::time::Duration;

use super::{Agent, AgentConfig};
use crate::tool::{Error, Registry, Tool};

/// [`Agent`] builder.
pub struct AgentBuilder {
    config: AgentConfig,
    registry: Registry,
    error: Option<Error>,
}

impl AgentBuilder {
    /// Creates a new builder for an agent with the given name.
    #[inline]
    pub fn with_name<S: Into<String>>(name: S) -> Self {
        Self::with_config(AgentConfig {
            name: name.into(),
            ..Default::default()
        })
    }

    /// Creates a new builder from an existing configuration.
    #[inline]
    pub fn with_config(config: AgentConfig) -> Self {
        Self {
            config,
            registry: Registry::new(),
            error: None,
        }
    }

    /// Sets the model reference.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.config.model = model.into();
        self
    }

    /// Sets the description.
    #[inline]
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.config.description = description.into();
        self
    }

    /// Sets the instruction for the agent.
    #[inline]
    pub fn with_instruction<S: Into<String>>(mut self, instruction: S) -> Self {
        self.config.instruction = instruction.into();
        self
    }

    /// Bounds the execution time of each tool call.
    #[inline]
    pub fn with_tool_deadline(mut self, deadline: Duration) -> Self {
        let millis = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX);
        self.config.tool_deadline_ms = Some(millis);
        self
    }

    /// Registers a tool.
    ///
    /// A registration error is kept and reported by [`Self::build`].
    #[inline]
    pub fn with_tool<T: Tool>(mut self, tool: T) -> Self {
        if self.error.is_none() {
            self.error = self.registry.register(tool).err();
        }
        self
    }

    /// Builds the agent.
    ///
    /// Fails if the agent has no name, or if any tool failed to register.
    pub fn build(self) -> Result<Agent, Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.config.name.is_empty() {
            return Err(
                Error::invalid_input().with_reason("agent name must not be empty")
            );
        }
        Ok(Agent::from_builder(self.config, self.registry))
    }
}
