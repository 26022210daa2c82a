//! Session state — the one value that survives across interactions: the
//! current practice question. Overwritten on each regeneration, cleared only
//! by restart. Single-user service, so a single slot suffices.

use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct SessionStore {
    current_question: RwLock<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current question.
    pub fn set_question(&self, question: String) {
        *self
            .current_question
            .write()
            .expect("session lock poisoned") = Some(question);
    }

    /// The current question, if one has been generated this session.
    pub fn question(&self) -> Option<String> {
        self.current_question
            .read()
            .expect("session lock poisoned")
            .clone()
    }
}
