//! To-Do List App
//!
//! Root component: loads the stored list, provides state, lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoSession;

use crate::components::{NewTodoForm, TodoFooter, TodoListView};
use crate::config::AppConfig;
use crate::context::TodoContext;
use crate::storage;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Load before the first render
    let session = TodoSession::open(storage::todo_repository(&config.storage_key));

    let store = Store::new(AppState::new(session));
    provide_context(store);
    provide_context(TodoContext::new(store));

    view! {
        <div class="container">
            <h1>"To-Do List"</h1>
            <NewTodoForm />
            <TodoListView />
            <TodoFooter />
        </div>
    }
}
