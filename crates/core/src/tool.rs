//! Tool call supports.
//!
//! A [`Tool`] is a named, schema-described capability. Tools are collected
//! in a [`Registry`], and an [`Invoker`] bridges untyped requests from an
//! orchestrator to them, always answering with an [`InvocationResult`].

mod error;
mod invocation;
mod invoker;
mod registry;
mod spec;

use std::panic::{self, AssertUnwindSafe};

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use error::{Error, ErrorKind};
pub use invocation::{InvocationRequest, InvocationResult};
pub use invoker::{Invoker, InvokerBuilder};
pub use registry::{Registry, ToolDefinition};
pub use spec::{OutputField, ParameterSpec, SemanticType, ToolSpec};

/// The result of a tool call.
pub type ToolResult<T> = Result<T, Error>;

/// A JSON object keyed by field or parameter name.
pub type Payload = Map<String, Value>;

/// A tool that can be called by the model.
///
/// Implementations of this trait should be stateless, and may not maintain any
/// internal state.
///
/// The tool can be context-aware, meaning it can access additional information
/// about the current execution context, such as a clock. To do this, make the
/// context an immutable state of the tool, which can be set during
/// initialization.
///
/// The input and output types double as the tool's schema: the parameters
/// and result fields advertised to the orchestrator are derived from their
/// [`JsonSchema`] implementations.
pub trait Tool: Send + Sync + 'static {
    /// The type of input that the tool accepts.
    type Input: DeserializeOwned + JsonSchema;

    /// The type of output that the tool produces. It must serialize to a
    /// JSON object.
    type Output: Serialize + JsonSchema;

    /// Returns the name of the tool.
    fn name(&self) -> &str;

    /// Returns the description of the tool.
    fn description(&self) -> &str;

    /// Executes the tool with the given input.
    ///
    /// Every failure must be reported through the returned error, with
    /// [`ErrorKind::InvalidInput`] or [`ErrorKind::ExecutionFailed`].
    fn execute(&self, input: Self::Input) -> ToolResult<Self::Output>;
}

/// A type-erased tool, as stored in a [`Registry`].
pub trait ToolObject: Send + Sync + 'static {
    /// Returns the declared shape of the tool.
    fn spec(&self) -> &ToolSpec;

    /// Calls the tool with untyped arguments.
    ///
    /// Arguments are decoded into the tool's input type, and the output is
    /// encoded back into a JSON object. This method never panics.
    fn call(&self, arguments: Payload) -> ToolResult<Payload>;
}

pub(crate) struct AnyTool<T: Tool> {
    tool: T,
    spec: ToolSpec,
}

impl<T: Tool> AnyTool<T> {
    #[inline]
    pub fn new(tool: T) -> Self {
        let spec = ToolSpec::of(&tool);
        Self { tool, spec }
    }
}

impl<T: Tool> ToolObject for AnyTool<T> {
    #[inline]
    fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    fn call(&self, arguments: Payload) -> ToolResult<Payload> {
        let input: T::Input = serde_json::from_value(Value::Object(arguments))
            .map_err(|err| Error::invalid_input().with_reason(format!("{err}")))?;

        let output = panic::catch_unwind(AssertUnwindSafe(|| {
            self.tool.execute(input)
        }))
        .map_err(|_| {
            error!("tool `{}` panicked", self.spec.name());
            Error::execution_failed()
                .with_reason(format!("tool `{}` panicked", self.spec.name()))
        })??;

        match serde_json::to_value(output) {
            Ok(Value::Object(payload)) => Ok(payload),
            Ok(other) => Err(Error::execution_failed().with_reason(format!(
                "tool `{}` produced a non-object output: {other}",
                self.spec.name()
            ))),
            Err(err) => {
                Err(Error::execution_failed().with_reason(format!("{err}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, JsonSchema)]
    struct DivideParameters {
        dividend: i64,
        divisor: i64,
    }

    #[derive(Serialize, JsonSchema)]
    struct DivideOutput {
        quotient: i64,
    }

    struct DivideTool;

    impl Tool for DivideTool {
        type Input = DivideParameters;
        type Output = DivideOutput;

        fn name(&self) -> &str {
            "divide"
        }

        fn description(&self) -> &str {
            "Divides two integers."
        }

        fn execute(&self, input: DivideParameters) -> ToolResult<DivideOutput> {
            if input.divisor == 0 {
                return Err(
                    Error::invalid_input().with_reason("`divisor` must not be 0")
                );
            }
            Ok(DivideOutput {
                quotient: input.dividend / input.divisor,
            })
        }
    }

    struct BareTool;

    impl Tool for BareTool {
        type Input = DivideParameters;
        type Output = i64;

        fn name(&self) -> &str {
            "bare"
        }

        fn description(&self) -> &str {
            "Returns a bare number."
        }

        fn execute(&self, input: DivideParameters) -> ToolResult<i64> {
            Ok(input.dividend)
        }
    }

    fn arguments(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_call_decodes_and_encodes() {
        let tool = AnyTool::new(DivideTool);
        let payload = tool
            .call(arguments(json!({"dividend": 7, "divisor": 2})))
            .unwrap();
        assert_eq!(Value::Object(payload), json!({"quotient": 3}));
    }

    #[test]
    fn test_call_reports_decode_error() {
        let tool = AnyTool::new(DivideTool);
        let err = tool
            .call(arguments(json!({"dividend": "seven", "divisor": 2})))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_call_passes_tool_error_through() {
        let tool = AnyTool::new(DivideTool);
        let err = tool
            .call(arguments(json!({"dividend": 7, "divisor": 0})))
            .unwrap_err();
        assert_eq!(err, Error::invalid_input().with_reason("`divisor` must not be 0"));
    }

    #[test]
    fn test_call_rejects_non_object_output() {
        let tool = AnyTool::new(BareTool);
        let err = tool
            .call(arguments(json!({"dividend": 7, "divisor": 1})))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExecutionFailed);
    }
}
