use std::path::PathBuf;

use adk::agents::FileAgent;
use adk::config::AgentConfiguration;
use anyhow::{anyhow, Result};
use bat::PrettyPrinter;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use cliclack::{input, spinner};
use console::style;
use tracing_subscriber::EnvFilter;

const DEMO_PROMPTS: [(&str, &str); 4] = [
    (
        "List files in current directory",
        "What files are in the current directory?",
    ),
    (
        "Read Cargo.toml file",
        "Can you read the Cargo.toml file and tell me what it does?",
    ),
    (
        "Create a new file",
        "Create a file called test_output.txt with the content 'Hello from the agent!'",
    ),
    (
        "Complex multi-tool task",
        "Read the README.md file if it exists, and create a summary.txt file with a brief summary of its contents",
    ),
];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prompt to send; starts an interactive session when omitted
    prompt: Option<String>,

    /// Model to use (defaults to GEMINI_MODEL, then gemini-2.5-flash)
    #[arg(short, long)]
    model: Option<String>,

    /// Env file loaded before the working directory's .env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Maximum model turns spent on a single request
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    max_turns: Option<usize>,

    /// Run the scripted example prompts
    #[arg(long, conflicts_with = "prompt")]
    demo: bool,
}

fn main() -> Result<()> {
    // stdout carries tool calls and answers, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.env_file {
        Some(path) => AgentConfiguration::load_with_env_file(path)?,
        None => AgentConfiguration::load()?,
    };
    if let Some(model) = &cli.model {
        config = config.with_model(model);
    }
    if let Some(max_turns) = cli.max_turns {
        config = config.with_max_turns(max_turns);
    }

    let mut agent = FileAgent::new(&config)?;

    if cli.demo {
        run_demo(&mut agent)
    } else if let Some(prompt) = cli.prompt {
        let response = agent.run_to_completion(prompt)?;
        render(&response.text())
    } else {
        run_session(&mut agent)
    }
}

fn run_demo(agent: &mut FileAgent) -> Result<()> {
    for (i, (title, prompt)) in DEMO_PROMPTS.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", "=".repeat(80));
        println!("Example {}: {}", i + 1, title);
        println!("{}", "=".repeat(80));

        let response = agent.run_to_completion(*prompt)?;
        println!("Agent: {}", response.text());
    }
    Ok(())
}

fn run_session(agent: &mut FileAgent) -> Result<()> {
    println!(
        "adk file agent ({}) {}",
        agent.model(),
        style("- type \"exit\" to end the session").dim()
    );
    println!("\n");

    loop {
        let message_text: String = input("Message:").placeholder("").multiline().interact()?;

        if message_text.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let spin = spinner();
        spin.start("awaiting reply");
        let result = agent.run_to_completion(message_text);
        spin.stop("");

        match result {
            Ok(response) => render(&response.text())?,
            // The conversation survives a failed request
            Err(err) => eprintln!("{}", style(format!("Error: {}", err)).red()),
        }
        println!("\n");
    }
    Ok(())
}

fn render(content: &str) -> Result<()> {
    PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("markdown")
        .print()
        .map_err(|e| anyhow!("failed to render reply: {}", e))?;
    Ok(())
}
