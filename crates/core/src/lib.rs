//! Core logic for tool-using agents: the tool contract, the registry, the
//! invocation boundary and the agent definition.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod agent;
pub mod tool;

pub use agent::{Agent, AgentBuilder, AgentConfig};
