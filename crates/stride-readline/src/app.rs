//! Terminal chat front end state: one user, one session store.

use crate::command::Command;
use rand::Rng;
use std::sync::Arc;
use stride_core::session::SessionLabel;
use stride_core::{QuestionIndex, ResponseResolver, SessionStore, Transcript, format_transcript};

pub const ABOUT: &str = "\
Welcome to Stride Sync, your personalized gym trainer and fitness companion!
Our mission is to help you reach your fitness goals with one place to track
your workouts, food intake, and more.

What we offer:
  - Exercise Tracking: record your workouts and keep track of progress.
  - Food Tracking: monitor your food intake and keep a balanced diet.
  - Personalized Fitness Plan: plans tailored to your goals and preferences.
  - BMI Calculator: calculate and monitor your Body Mass Index.
  - Workout Logs: keep a log of every workout to follow your progress.

Ready to take the first step? Pick a question with /questions and start chatting.";

pub const HELP: &str = "\
  <n> or /ask <n>   ask question number n
  /questions        list the questions you can ask
  /new              start a new chat
  /clear            clear the current chat
  /clear-all        delete every chat and start over
  /sessions         list chats
  /switch <n>       switch to chat number n
  /share            print the current chat as plain text
  /about            about Stride Sync
  quit | exit       leave";

/// What the view should show after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Answered { question: String, answer: String },
    Transcript(Transcript),
    Questions(Vec<String>),
    Sessions(Vec<SessionLabel>),
    Shared(String),
    Text(&'static str),
    Warning(String),
    Quit,
}

pub struct ChatApp<R> {
    index: Arc<QuestionIndex>,
    resolver: ResponseResolver<R>,
    store: SessionStore,
}

impl<R: Rng> ChatApp<R> {
    pub fn new(resolver: ResponseResolver<R>) -> Self {
        Self {
            index: Arc::clone(resolver.index()),
            resolver,
            store: SessionStore::new(),
        }
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Ask(n) => self.ask(n),
            Command::Questions => Reply::Questions(self.index.questions().to_vec()),
            Command::NewChat => {
                self.store.create_session();
                self.current()
            }
            Command::ClearCurrent => {
                self.store.clear_current();
                self.current()
            }
            Command::ClearAll => {
                self.store.clear_all();
                self.current()
            }
            Command::Sessions => Reply::Sessions(self.store.session_labels()),
            Command::Switch(n) => self.switch(n),
            Command::Share => Reply::Shared(format_transcript(self.store.active_transcript())),
            Command::About => Reply::Text(ABOUT),
            Command::Help => Reply::Text(HELP),
            Command::Quit => Reply::Quit,
        }
    }

    fn ask(&mut self, n: usize) -> Reply {
        let Some(question) = n
            .checked_sub(1)
            .and_then(|i| self.index.questions().get(i))
            .cloned()
        else {
            return Reply::Warning(format!(
                "No question #{}; pick 1-{} (see /questions)",
                n,
                self.index.len()
            ));
        };

        let answer = self.store.ask(&mut self.resolver, &question);
        Reply::Answered { question, answer }
    }

    fn switch(&mut self, n: usize) -> Reply {
        let target = self
            .store
            .session_labels()
            .into_iter()
            .find(|label| label.number == n);

        match target {
            Some(label) => match self.store.switch_active(label.id) {
                Ok(()) => self.current(),
                Err(e) => Reply::Warning(e.to_string()),
            },
            None => Reply::Warning(format!("No chat #{}", n)),
        }
    }

    fn current(&mut self) -> Reply {
        Reply::Transcript(self.store.active_transcript().clone())
    }
}
