//! Transcript entries and the share/export formatter.

use serde::{Deserialize, Serialize};

/// One entry in a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnEntry {
    /// Plain system message shown at the top of a fresh chat.
    Greeting { text: String },
    /// A selected question and the answer it received.
    Exchange { question: String, answer: String },
}

impl TurnEntry {
    pub fn greeting(text: impl Into<String>) -> Self {
        Self::Greeting { text: text.into() }
    }

    pub fn exchange(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::Exchange {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered history of one chat session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TurnEntry>,
}

impl Transcript {
    /// A transcript holding only the given greeting.
    pub fn with_greeting(text: impl Into<String>) -> Self {
        Self {
            entries: vec![TurnEntry::greeting(text)],
        }
    }

    pub fn entries(&self) -> &[TurnEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TurnEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TurnEntry> {
        self.entries.last()
    }

    pub(crate) fn push(&mut self, entry: TurnEntry) {
        self.entries.push(entry);
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TurnEntry;
    type IntoIter = std::slice::Iter<'a, TurnEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Renders a transcript as plain text for copying or sharing.
///
/// Greetings become their text followed by a blank line; exchanges become
/// `Q: <question>\nA: <answer>\n\n`.
pub fn format_transcript(transcript: &Transcript) -> String {
    let mut out = String::new();
    for entry in transcript {
        match entry {
            TurnEntry::Greeting { text } => {
                out.push_str(text);
                out.push_str("\n\n");
            }
            TurnEntry::Exchange { question, answer } => {
                out.push_str("Q: ");
                out.push_str(question);
                out.push_str("\nA: ");
                out.push_str(answer);
                out.push_str("\n\n");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_greeting_only() {
        let transcript = Transcript::with_greeting("Hello!");
        assert_eq!(format_transcript(&transcript), "Hello!\n\n");
    }

    #[test]
    fn test_format_preserves_order() {
        let mut transcript = Transcript::with_greeting("Hi");
        transcript.push(TurnEntry::exchange("q1", "a1"));
        transcript.push(TurnEntry::exchange("q2", "a2"));

        assert_eq!(
            format_transcript(&transcript),
            "Hi\n\nQ: q1\nA: a1\n\nQ: q2\nA: a2\n\n"
        );
    }

    #[test]
    fn test_format_empty_transcript() {
        assert_eq!(format_transcript(&Transcript::default()), "");
    }

    #[test]
    fn test_entries_serialize_with_kind_tag() {
        let mut transcript = Transcript::with_greeting("Hi");
        transcript.push(TurnEntry::exchange("q", "a"));

        let json = serde_json::to_value(&transcript).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {"kind": "greeting", "text": "Hi"},
                {"kind": "exchange", "question": "q", "answer": "a"}
            ])
        );
    }
}
