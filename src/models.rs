//! Frontend Models
//!
//! Todo records and the list filter.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One todo entry. Persisted as `{id, todo, completed}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    #[serde(rename = "todo")]
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// New, not yet completed todo with a random v4 UUID as its id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }

    /// Todo from raw input text, trimmed. `None` when nothing is left.
    pub fn from_input(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self::new(text))
    }
}

/// Which todos the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}
