//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod todo_list_view;
mod todo_row;
mod todo_editor;
mod todo_footer;

pub use new_todo_form::NewTodoForm;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
pub use todo_editor::TodoEditor;
pub use todo_footer::TodoFooter;
