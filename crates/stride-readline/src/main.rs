mod app;
mod command;
mod helper;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing_subscriber::EnvFilter;

use stride_core::{ResponseResolver, Transcript, TurnEntry};
use stride_infrastructure::{AppConfig, load_question_index};

use crate::app::{ChatApp, Reply};
use crate::helper::CliHelper;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "FitBuddy - the Stride Sync fitness FAQ chatbot", long_about = None)]
struct Cli {
    /// Intent catalog JSON file (overrides config.toml)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load_default()?,
    };
    init_tracing(config.log_level.as_deref().unwrap_or("warn"));

    // No chat without a valid catalog.
    let catalog_path = config.resolve_catalog_path(cli.catalog.as_deref());
    let index = match load_question_index(&catalog_path) {
        Ok(index) => Arc::new(index),
        Err(e) if e.is_load() => {
            return Err(e).with_context(|| {
                format!("Cannot start chat: catalog {:?} failed to load", catalog_path)
            });
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(catalog = ?catalog_path, questions = index.len(), "Starting chat");

    let questions = index.questions().to_vec();
    let mut app = ChatApp::new(ResponseResolver::new(index));

    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(questions)));

    println!("{}", "=== FitBuddy ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/questions' to see what you can ask, '/help' for commands, or 'quit' to exit."
            .bright_black()
    );
    println!();
    print_transcript(app.store_mut().active_transcript());

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(trimmed) {
                    tracing::debug!("Failed to record history entry: {}", e);
                }

                let reply = match command::parse(trimmed) {
                    Ok(command) => app.execute(command),
                    Err(message) => Reply::Warning(message),
                };
                if reply == Reply::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                print_reply(&reply);

                let chat_count = app.store_mut().len();
                if let Some(helper) = rl.helper_mut() {
                    helper.set_chat_count(chat_count);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Answered { question, answer } => print_exchange(question, answer),
        Reply::Transcript(transcript) => print_transcript(transcript),
        Reply::Questions(questions) => {
            for (i, question) in questions.iter().enumerate() {
                println!("{} {}", format!("{:>3}.", i + 1).bright_black(), question);
            }
        }
        Reply::Sessions(labels) => {
            for label in labels {
                if label.is_active {
                    println!("{}", format!("➡️ {}", label.label).bright_yellow());
                } else {
                    println!("   {}", label.label);
                }
            }
        }
        Reply::Shared(text) => {
            println!("{}", "Copy and share your chat below:".bright_black());
            print!("{}", text);
        }
        Reply::Text(text) => println!("{}", text),
        Reply::Warning(message) => println!("{}", message.yellow()),
        Reply::Quit => {}
    }
}

fn print_transcript(transcript: &Transcript) {
    println!("{}", "### Chat History".bold());
    for entry in transcript {
        match entry {
            TurnEntry::Greeting { text } => {
                println!("{}", format!("Chatbot: {}", text).italic().bright_black());
            }
            TurnEntry::Exchange { question, answer } => print_exchange(question, answer),
        }
    }
}

fn print_exchange(question: &str, answer: &str) {
    println!("{} {}", "You:".green().bold(), question.green());
    for line in answer.lines() {
        println!("{}", line.white().on_black());
    }
    println!("{}", "---".bright_black());
}
