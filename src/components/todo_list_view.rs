//! Todo List View Component
//!
//! Renders the whole list, or the empty message when there is nothing.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::display;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let todos = move || store.session().read().todos().items().to_vec();
    let is_empty = move || store.session().read().todos().is_empty();

    view! {
        <ul id="todo-list">
            <For
                each=todos
                // Key on every mutable field so edits and toggles re-render the row
                key=|todo| (todo.id, todo.text.clone(), todo.completed)
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
        <p id="empty-message" style=move || display::empty_message_style(is_empty())>
            {display::EMPTY_MESSAGE}
        </p>
    }
}
