use first_agent_core::tool::{Error as ToolError, InvocationRequest, Payload};
use serde_json::Value;

/// A command entered in the terminal driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Lists the tools of the agent.
    Tools,
    /// Shows the agent definition.
    Agent,
    /// Leaves the driver.
    Quit,
    /// Invokes a tool.
    Invoke(InvocationRequest),
}

/// Parses a line of input.
///
/// Besides the `:`-prefixed commands, a line is either a JSON invocation
/// request (`{"tool_name": ..., "arguments": {...}}`) or a tool name
/// followed by a JSON object of arguments. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ToolError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if let Some(command) = line.strip_prefix(':') {
        return match command {
            "tools" => Ok(Some(Command::Tools)),
            "agent" => Ok(Some(Command::Agent)),
            "quit" | "q" => Ok(Some(Command::Quit)),
            _ => Err(ToolError::invalid_input()
                .with_reason(format!("unknown command `:{command}`"))),
        };
    }

    if line.starts_with('{') {
        let request: InvocationRequest =
            serde_json::from_str(line).map_err(|err| {
                ToolError::invalid_input().with_reason(format!("{err}"))
            })?;
        return Ok(Some(Command::Invoke(request)));
    }

    let (tool_name, arguments) = match line.split_once(char::is_whitespace) {
        Some((tool_name, rest)) => (tool_name, parse_arguments(rest.trim())?),
        None => (line, Payload::new()),
    };
    Ok(Some(Command::Invoke(InvocationRequest::new(tool_name, arguments))))
}

fn parse_arguments(text: &str) -> Result<Payload, ToolError> {
    match serde_json::from_str(text) {
        Ok(Value::Object(arguments)) => Ok(arguments),
        Ok(_) => Err(ToolError::invalid_input()
            .with_reason("arguments must be a JSON object")),
        Err(err) => Err(ToolError::invalid_input().with_reason(format!("{err}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn invoke(tool_name: &str, arguments: Value) -> Option<Command> {
        let arguments = arguments.as_object().cloned().unwrap();
        Some(Command::Invoke(InvocationRequest::new(tool_name, arguments)))
    }

    #[test]
    fn test_builtin_commands() {
        assert_eq!(parse_command("  ").unwrap(), None);
        assert_eq!(parse_command(":tools\n").unwrap(), Some(Command::Tools));
        assert_eq!(parse_command(":agent").unwrap(), Some(Command::Agent));
        assert_eq!(parse_command(":q").unwrap(), Some(Command::Quit));
        assert!(parse_command(":help").is_err());
    }

    #[test]
    fn test_tool_with_arguments() {
        assert_eq!(
            parse_command(r#"calculate_statistics {"numbers": [1, 2]}"#)
                .unwrap(),
            invoke("calculate_statistics", json!({"numbers": [1, 2]}))
        );
        assert_eq!(
            parse_command("get_weather").unwrap(),
            invoke("get_weather", json!({}))
        );
        assert!(parse_command("get_weather [1]").is_err());
        assert!(parse_command("get_weather {").is_err());
    }

    #[test]
    fn test_raw_request() {
        let command = parse_command(
            r#"{"id": "call-1", "tool_name": "get_weather", "arguments": {"city": "Paris"}}"#,
        )
        .unwrap();
        let Some(Command::Invoke(request)) = command else {
            panic!("expected an invocation");
        };
        assert_eq!(request.id.as_deref(), Some("call-1"));
        assert_eq!(request.tool_name, "get_weather");
        assert_eq!(request.arguments["city"], "Paris");
    }
}
