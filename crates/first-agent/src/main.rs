//! A simple program that demonstrates how to use `first-agent` as a library.
//!
//! It plays the part of the orchestrator: you pick the tools to call, and
//! it prints what the model would get back.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::time::Duration;

use first_agent::core::Agent;
use first_agent::core::tool::InvocationResult;
use first_agent::{AssistantBuilder, Command, parse_command};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut builder = AssistantBuilder::new();
    if let Ok(model) = env::var("AGENT_MODEL") {
        builder = builder.with_model(model);
    }
    if let Ok(deadline) = env::var("AGENT_TOOL_DEADLINE_MS") {
        let Ok(millis) = deadline.parse::<u64>() else {
            eprintln!("AGENT_TOOL_DEADLINE_MS must be a number of milliseconds");
            return;
        };
        builder = builder.with_tool_deadline(Duration::from_millis(millis));
    }

    let agent = match builder.build() {
        Ok(agent) => agent,
        Err(err) => {
            eprintln!("failed to build the agent: {err}");
            return;
        }
    };
    let invoker = agent.invoker();

    print_agent(&agent);
    println!(
        "Type `:tools` to list tools, `<tool> {{json args}}` to call one, `:quit` to leave.\n"
    );

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = read_line(&mut lines).await else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{}{}\n", BAR_CHAR.bright_red(), err.reason().red());
                continue;
            }
        };

        match command {
            Command::Tools => print_tools(&agent),
            Command::Agent => print_agent(&agent),
            Command::Quit => break,
            Command::Invoke(request) => {
                let result = invoker.invoke_async(request).await;
                print_result(&result);
            }
        }
    }
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>) -> Option<String> {
    match lines.next_line().await {
        Ok(line) => line,
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}

fn print_agent(agent: &Agent) {
    let bar = BAR_CHAR.bright_cyan();
    println!("{bar}🤖 {} ({})", agent.name().bright_white().bold(), agent.model());
    for line in agent.instruction().lines() {
        println!("{bar}{line}");
    }
    println!();
}

fn print_tools(agent: &Agent) {
    let bar = BAR_CHAR.bright_cyan();
    for spec in agent.registry().list() {
        println!("{bar}{}", spec.name().bright_white().bold());
        for line in spec.description().lines() {
            println!("{bar}  {}", line.dimmed());
        }
        for param in spec.parameters() {
            let marker = if param.required { "" } else { "?" };
            println!("{bar}    {}{marker}: {}", param.name, param.ty);
        }
    }
    println!();
}

fn print_result(result: &InvocationResult) {
    let text = serde_json::to_string_pretty(result)
        .unwrap_or_else(|err| format!("<unprintable result: {err}>"));
    let bar = if result.is_success() {
        BAR_CHAR.bright_green().to_string()
    } else {
        BAR_CHAR.bright_red().to_string()
    };
    for line in text.lines() {
        println!("{bar}{line}");
    }
    println!();
}
