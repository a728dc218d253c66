//! Todo Entity
//!
//! A single user-entered task with completion state.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A to-do item
///
/// Serialized as `{"id", "text", "completed"}`; the id is the creation
/// timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier (creation timestamp, ms)
    pub id: u64,
    /// Task text, never empty
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Copy of this item with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Copy of this item with new text, completion untouched
    pub fn with_text(&self, text: String) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }
}

impl Entity for TodoItem {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Trim user input; `None` when nothing is left.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = TodoItem::new(1_700_000_000_000, "Buy milk".to_string());
        assert_eq!(todo.id(), 1_700_000_000_000);
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_toggled_and_with_text() {
        let todo = TodoItem::new(1, "Write report".to_string());
        let done = todo.toggled();
        assert!(done.completed);
        assert!(!done.toggled().completed);

        let renamed = done.with_text("Write final report".to_string());
        assert_eq!(renamed.text, "Write final report");
        assert!(renamed.completed);
        assert_eq!(renamed.id, 1);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  walk dog \n"), Some("walk dog".to_string()));
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text(" \t "), None);
    }

    #[test]
    fn test_wire_format() {
        let todo = TodoItem::new(42, "Pay rent".to_string());
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":42,"text":"Pay rent","completed":false}"#);
    }
}
