//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoSession;

use crate::storage::TodoRepository;

/// Global application state
#[derive(Store)]
pub struct AppState {
    /// The todo list, edit state and its storage
    pub session: TodoSession<TodoRepository>,
}

impl AppState {
    pub fn new(session: TodoSession<TodoRepository>) -> Self {
        Self { session }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
