use std::sync::Arc;
use std::time::Duration;

use tokio::task::spawn_blocking;
use tokio::time::timeout;

use crate::tool::{
    Error, InvocationRequest, InvocationResult, Payload, Registry, ToolObject,
    ToolResult,
};

/// [`Invoker`] builder.
pub struct InvokerBuilder {
    registry: Arc<Registry>,
    deadline: Option<Duration>,
}

impl InvokerBuilder {
    /// Creates a builder over the given registry.
    #[inline]
    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            deadline: None,
        }
    }

    /// Bounds the execution time of calls made with
    /// [`Invoker::invoke_async`] and [`Invoker::invoke_all`].
    #[inline]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Builds the invoker.
    #[inline]
    pub fn build(self) -> Invoker {
        Invoker {
            registry: self.registry,
            deadline: self.deadline,
        }
    }
}

/// The validation-and-dispatch boundary between an orchestrator and the
/// tools of a [`Registry`].
///
/// Whatever happens, an invocation produces an [`InvocationResult`]:
/// unknown tools, malformed arguments, failing or misbehaving tools all
/// come back as [`InvocationResult::Failure`].
#[derive(Clone)]
pub struct Invoker {
    registry: Arc<Registry>,
    deadline: Option<Duration>,
}

impl Invoker {
    /// Creates an invoker without a deadline.
    #[inline]
    pub fn new(registry: Arc<Registry>) -> Self {
        InvokerBuilder::with_registry(registry).build()
    }

    /// Returns the registry this invoker dispatches to.
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the configured deadline, if any.
    #[inline]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Invokes a tool on the current thread.
    ///
    /// No deadline applies here, since a synchronous call can't be
    /// interrupted.
    pub fn invoke(&self, request: &InvocationRequest) -> InvocationResult {
        let span = debug_span!("invoke", tool = %request.tool_name);
        let _enter = span.enter();

        let tool = match self.registry.resolve(&request.tool_name) {
            Ok(tool) => tool,
            Err(err) => {
                warn!("tool not found: {}", request.tool_name);
                return err.into();
            }
        };
        dispatch(tool.as_ref(), &request.arguments).into()
    }

    /// Invokes a tool on the blocking thread pool, enforcing the deadline
    /// if one is configured.
    ///
    /// A call that breaches the deadline is reported as
    /// [`ErrorKind::ExecutionFailed`](super::ErrorKind). The computation
    /// itself keeps running in the background and its result is dropped.
    pub async fn invoke_async(
        &self,
        request: InvocationRequest,
    ) -> InvocationResult {
        let span = debug_span!("invoke", tool = %request.tool_name);

        let tool = match self.registry.resolve(&request.tool_name) {
            Ok(tool) => tool,
            Err(err) => {
                span.in_scope(|| warn!("tool not found: {}", request.tool_name));
                return err.into();
            }
        };

        let InvocationRequest {
            tool_name,
            arguments,
            ..
        } = request;
        let task = spawn_blocking({
            let span = span.clone();
            move || span.in_scope(|| dispatch(tool.as_ref(), &arguments))
        });

        let joined = match self.deadline {
            Some(deadline) => match timeout(deadline, task).await {
                Ok(joined) => joined,
                Err(_) => {
                    span.in_scope(|| warn!("deadline exceeded: {deadline:?}"));
                    return Error::execution_failed()
                        .with_reason(format!(
                            "tool `{tool_name}` did not finish within {deadline:?}"
                        ))
                        .into();
                }
            },
            None => task.await,
        };

        match joined {
            Ok(result) => result.into(),
            Err(err) => {
                span.in_scope(|| error!("tool task failed: {err}"));
                Error::execution_failed()
                    .with_reason(format!("tool `{tool_name}` failed: {err}"))
                    .into()
            }
        }
    }

    /// Invokes independent requests concurrently.
    ///
    /// Results are returned in the order of `requests`; the calls
    /// themselves may complete in any order.
    pub async fn invoke_all(
        &self,
        requests: Vec<InvocationRequest>,
    ) -> Vec<InvocationResult> {
        let handles: Vec<_> = requests
            .into_iter()
            .map(|request| {
                let invoker = self.clone();
                trace!("spawning a tool call: {}", request.tool_name);
                tokio::spawn(async move { invoker.invoke_async(request).await })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(err) => Error::execution_failed()
                    .with_reason(format!("{err}"))
                    .into(),
            };
            results.push(result);
        }
        results
    }
}

/// Validates the arguments, calls the tool and validates its payload.
///
/// Errors raised by the tool itself are returned unchanged.
fn dispatch(tool: &dyn ToolObject, arguments: &Payload) -> ToolResult<Payload> {
    let spec = tool.spec();
    let arguments = match spec.prepare_arguments(arguments) {
        Ok(arguments) => arguments,
        Err(err) => {
            warn!("rejected arguments: {}", err.reason());
            return Err(err);
        }
    };

    trace!("calling with args: {arguments:?}");
    let payload = tool.call(arguments)?;

    spec.validate_output(&payload)?;
    trace!("got payload: {payload:?}");
    Ok(payload)
}
