use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::SLASH_COMMANDS;

/// Rustyline helper that knows the question picker and the open chats.
///
/// - `/` completes command names
/// - `/ask ` completes question numbers, showing the question text
/// - `/switch ` completes chat numbers
/// - a question number (bare or after `/ask`) is hinted with its question
pub struct CliHelper {
    commands: Vec<String>,
    questions: Vec<String>,
    chat_count: usize,
}

impl CliHelper {
    pub fn new(questions: Vec<String>) -> Self {
        Self {
            commands: SLASH_COMMANDS.iter().map(|c| c.to_string()).collect(),
            questions,
            chat_count: 1,
        }
    }

    /// Keeps `/switch` completion in step with the session store.
    pub fn set_chat_count(&mut self, chat_count: usize) {
        self.chat_count = chat_count;
    }

    fn question(&self, number: &str) -> Option<&String> {
        let n: usize = number.parse().ok()?;
        self.questions.get(n.checked_sub(1)?)
    }

    fn command_candidates(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect()
    }

    fn question_candidates(&self, prefix: &str) -> Vec<Pair> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, question)| (i + 1, question))
            .filter(|(n, _)| n.to_string().starts_with(prefix))
            .map(|(n, question)| Pair {
                display: format!("{:>3}. {}", n, question),
                replacement: n.to_string(),
            })
            .collect()
    }

    fn chat_candidates(&self, prefix: &str) -> Vec<Pair> {
        (1..=self.chat_count)
            .filter(|n| n.to_string().starts_with(prefix))
            .map(|n| Pair {
                display: format!("Chat #{}", n),
                replacement: n.to_string(),
            })
            .collect()
    }

    /// Candidates for `line` (already cut at the cursor) and where they start.
    fn candidates(&self, line: &str) -> (usize, Vec<Pair>) {
        if !line.starts_with('/') {
            return (0, vec![]);
        }

        match line.split_once(' ') {
            None => (0, self.command_candidates(line)),
            Some((command, arg)) if !arg.contains(' ') => {
                let start = command.len() + 1;
                match command {
                    "/ask" => (start, self.question_candidates(arg)),
                    "/switch" => (start, self.chat_candidates(arg)),
                    _ => (start, vec![]),
                }
            }
            Some(_) => (0, vec![]),
        }
    }

    /// Hint text for `line` (already cut at the cursor).
    fn hint_for(&self, line: &str) -> Option<String> {
        let number = match line.strip_prefix("/ask ") {
            Some(arg) => arg,
            None if !line.starts_with('/') => line,
            None => {
                if line.contains(' ') {
                    return None;
                }
                return self
                    .commands
                    .iter()
                    .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                    .map(|cmd| cmd[line.len()..].to_string());
            }
        };

        self.question(number.trim())
            .map(|question| format!("  {}", question))
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        self.hint_for(&line[..pos])
    }
}

impl Validator for CliHelper {}
