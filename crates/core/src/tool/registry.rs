use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::tool::{AnyTool, Error, Tool, ToolObject, ToolSpec};

/// Describes a tool as advertised to the model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolDefinition {
    /// Name of the tool.
    pub name: String,
    /// Description of the tool.
    pub description: String,
    /// Parameters definition of the tool, as a JSON schema.
    pub parameters: Value,
}

/// An ordered set of tools available to one orchestrator.
///
/// Names are unique within a registry. Registration requires exclusive
/// access, so once the registry is shared (typically behind an [`Arc`])
/// it can be read concurrently without locking.
#[derive(Default)]
pub struct Registry {
    tools: Vec<Arc<dyn ToolObject>>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool.
    ///
    /// Fails with [`ErrorKind::DuplicateName`](super::ErrorKind) if a tool
    /// with the same name is already present; the existing one is kept.
    pub fn register<T: Tool>(&mut self, tool: T) -> Result<(), Error> {
        self.register_object(Arc::new(AnyTool::new(tool)))
    }

    /// Registers an already type-erased tool.
    pub fn register_object(
        &mut self,
        tool: Arc<dyn ToolObject>,
    ) -> Result<(), Error> {
        let name = tool.spec().name();
        if name.is_empty() {
            return Err(
                Error::invalid_input().with_reason("tool name must not be empty")
            );
        }
        if self.index.contains_key(name) {
            warn!("tool already registered: {name}");
            return Err(Error::duplicate_name()
                .with_reason(format!("tool `{name}` is already registered")));
        }

        debug!("registered tool: {name}");
        self.index.insert(name.to_owned(), self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Looks a tool up by its exact, case-sensitive name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ToolObject>, Error> {
        self.index
            .get(name)
            .map(|&index| Arc::clone(&self.tools[index]))
            .ok_or_else(|| {
                Error::not_found()
                    .with_reason(format!("no tool named `{name}`"))
            })
    }

    /// Returns the specs of all tools in registration order.
    pub fn list(&self) -> Vec<&ToolSpec> {
        self.tools.iter().map(|tool| tool.spec()).collect()
    }

    /// Returns the definitions to advertise to the model, in registration
    /// order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| {
                let spec = tool.spec();
                ToolDefinition {
                    name: spec.name().to_owned(),
                    description: spec.description().to_owned(),
                    parameters: spec.parameters_json_schema().clone(),
                }
            })
            .collect()
    }

    /// Checks if a tool is registered under `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of registered tools.
    #[inline]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Checks if no tools are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::tool::{ErrorKind, ToolResult};

    #[derive(Deserialize, JsonSchema)]
    struct EchoParameters {
        text: String,
    }

    #[derive(Serialize, JsonSchema)]
    struct EchoOutput {
        text: String,
    }

    struct EchoTool(&'static str);

    impl Tool for EchoTool {
        type Input = EchoParameters;
        type Output = EchoOutput;

        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "Echoes the text back."
        }

        fn execute(&self, input: EchoParameters) -> ToolResult<EchoOutput> {
            Ok(EchoOutput { text: input.text })
        }
    }

    #[test]
    fn test_duplicate_name() {
        let mut registry = Registry::new();
        registry.register(EchoTool("echo")).unwrap();

        let err = registry.register(EchoTool("echo")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("echo").unwrap().spec().name(), "echo");
    }

    #[test]
    fn test_resolve_is_exact() {
        let mut registry = Registry::new();
        registry.register(EchoTool("echo")).unwrap();

        assert!(registry.contains("echo"));
        for name in ["Echo", "ech", "echo "] {
            let err = registry.resolve(name).err().unwrap();
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }
    }

    #[test]
    fn test_list_keeps_registration_order() {
        let mut registry = Registry::new();
        registry.register(EchoTool("b_tool")).unwrap();
        registry.register(EchoTool("a_tool")).unwrap();

        for _ in 0..3 {
            registry.resolve("a_tool").unwrap();
            registry.resolve("b_tool").unwrap();
        }

        let names: Vec<_> = registry.list().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["b_tool", "a_tool"]);

        let definitions = registry.definitions();
        assert_eq!(definitions[0].name, "b_tool");
        assert_eq!(definitions[1].description, "Echoes the text back.");
        assert_eq!(definitions[1].parameters["type"], "object");
    }

    #[test]
    fn test_empty_name() {
        let mut registry = Registry::new();
        let err = registry.register(EchoTool("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(registry.is_empty());
    }
}
