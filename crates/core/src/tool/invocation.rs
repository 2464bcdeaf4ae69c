use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{Error, ErrorKind, Payload, ToolResult};

/// A request to invoke a tool, as decided by the orchestrator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// An optional identifier used by the orchestrator to correlate the
    /// request with its result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The name of the tool to call.
    #[serde(alias = "name")]
    pub tool_name: String,
    /// The arguments to pass to the tool, keyed by parameter name.
    #[serde(default)]
    pub arguments: Payload,
}

impl InvocationRequest {
    /// Creates a request without an identifier.
    #[inline]
    pub fn new<S: Into<String>>(tool_name: S, arguments: Payload) -> Self {
        Self {
            id: None,
            tool_name: tool_name.into(),
            arguments,
        }
    }

    /// Sets the correlation identifier.
    #[inline]
    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// The outcome of an invocation: a structured payload or a structured
/// error, never anything else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvocationResult {
    /// The tool completed and produced a payload.
    Success {
        /// Result fields keyed by name.
        payload: Payload,
    },
    /// The invocation failed.
    Failure {
        /// What went wrong.
        kind: ErrorKind,
        /// A human-readable explanation.
        message: String,
    },
}

impl InvocationResult {
    /// Returns `true` if the invocation succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the payload of a successful invocation.
    #[inline]
    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Self::Success { payload } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the error kind of a failed invocation.
    #[inline]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Splits the result into a success flag and the payload or error as
    /// JSON.
    pub fn into_parts(self) -> (bool, Value) {
        match self {
            Self::Success { payload } => (true, Value::Object(payload)),
            Self::Failure { kind, message } => {
                (false, json!({ "kind": kind, "message": message }))
            }
        }
    }
}

impl From<Error> for InvocationResult {
    fn from(err: Error) -> Self {
        Self::Failure {
            kind: err.kind(),
            message: err.reason().into_owned(),
        }
    }
}

impl From<ToolResult<Payload>> for InvocationResult {
    fn from(result: ToolResult<Payload>) -> Self {
        match result {
            Ok(payload) => Self::Success { payload },
            Err(err) => err.into(),
        }
    }
}
