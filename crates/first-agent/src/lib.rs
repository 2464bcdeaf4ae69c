//! An out-of-the-box agent definition that assembles the built-in tools.
//!
//! The crate includes a terminal driver that stands in for an orchestrator,
//! so tools can be called by hand. You can also use it as a library to get
//! the assistant's instruction, tool definitions and invoker in your own
//! host app.

#![deny(missing_docs)]

mod assistant;
mod command;

pub use assistant::{AssistantBuilder, DEFAULT_MODEL};
pub use command::{Command, parse_command};

/// Re-exports of [`first_agent_core`] crate.
pub mod core {
    pub use first_agent_core::*;
}

/// Re-exports of [`first_agent_tools`] crate.
pub mod tools {
    pub use first_agent_tools::*;
}
