//! Display Helpers
//!
//! Pure formatting used by the components.

use todo_core::TodoList;

pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one above!";

/// CSS class of a todo's text span
pub fn text_class(completed: bool) -> &'static str {
    if completed { "todo-text completed" } else { "todo-text" }
}

/// Inline style toggling the empty-list message
pub fn empty_message_style(is_empty: bool) -> &'static str {
    if is_empty { "display: block;" } else { "display: none;" }
}

/// Footer line, e.g. "3 items, 1 completed"
pub fn summary(todos: &TodoList) -> String {
    let total = todos.len();
    let noun = if total == 1 { "item" } else { "items" };
    format!("{} {}, {} completed", total, noun, todos.completed_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_class() {
        assert_eq!(text_class(false), "todo-text");
        assert_eq!(text_class(true), "todo-text completed");
    }

    #[test]
    fn test_empty_message_style() {
        assert_eq!(empty_message_style(true), "display: block;");
        assert_eq!(empty_message_style(false), "display: none;");
    }

    #[test]
    fn test_summary() {
        let mut todos = TodoList::new();
        assert_eq!(summary(&todos), "0 items, 0 completed");

        todos.add("one", 1).unwrap();
        assert_eq!(summary(&todos), "1 item, 0 completed");

        todos.add("two", 2).unwrap();
        todos.toggle(2).unwrap();
        assert_eq!(summary(&todos), "2 items, 1 completed");
    }
}
