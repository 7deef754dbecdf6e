use crate::types::{Role, Turn};

/// An ordered, append-only log of turns.
///
/// Turns are kept in insertion order. The log only shrinks through
/// [`Conversation::reset`], which empties it entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation holding a single user question.
    pub fn with_question(question: impl Into<String>) -> Self {
        let mut conversation = Self::new();
        conversation.append(Role::User, question);
        conversation
    }

    /// Append a turn to the end of the log.
    ///
    /// Content is not validated; an assistant turn may be empty if that is
    /// what the remote service returned.
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(Turn::new(role, content));
    }

    /// Remove every turn.  Calling this on an empty log is a no-op.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    /// The turns in chronological order.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// The number of turns in the log.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if the log holds no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl From<Vec<Turn>> for Conversation {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}
