//! REPL command parsing.

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask the question at this 1-based picker position.
    Ask(usize),
    Questions,
    NewChat,
    ClearCurrent,
    ClearAll,
    Sessions,
    /// Switch to the chat with this 1-based number.
    Switch(usize),
    Share,
    About,
    Help,
    Quit,
}

/// Slash commands offered for completion.
pub const SLASH_COMMANDS: &[&str] = &[
    "/ask",
    "/questions",
    "/new",
    "/clear",
    "/clear-all",
    "/sessions",
    "/switch",
    "/share",
    "/about",
    "/help",
];

/// Parses one input line. A bare number is shorthand for `/ask <n>`.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line == "quit" || line == "exit" {
        return Ok(Command::Quit);
    }
    if let Ok(n) = line.parse::<usize>() {
        return Ok(Command::Ask(n));
    }

    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match name {
        "/ask" => number_arg(arg, "/ask <number>").map(Command::Ask),
        "/switch" => number_arg(arg, "/switch <chat number>").map(Command::Switch),
        "/questions" => Ok(Command::Questions),
        "/new" => Ok(Command::NewChat),
        "/clear" => Ok(Command::ClearCurrent),
        "/clear-all" => Ok(Command::ClearAll),
        "/sessions" => Ok(Command::Sessions),
        "/share" => Ok(Command::Share),
        "/about" => Ok(Command::About),
        "/help" => Ok(Command::Help),
        _ => Err(format!("Unknown command: {}", line)),
    }
}

fn number_arg(arg: Option<&str>, usage: &str) -> Result<usize, String> {
    arg.and_then(|a| a.parse().ok())
        .ok_or_else(|| format!("Usage: {}", usage))
}
