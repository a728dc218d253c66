//! Todo Row Component
//!
//! One `li` of the list, either showing the todo or editing it.

use leptos::prelude::*;
use todo_core::TodoItem;

use crate::components::TodoEditor;
use crate::context::use_todo_context;
use crate::display;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single todo row
#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    let ctx = use_todo_context();
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text;
    let is_editing = move || store.session().read().editing() == Some(id);

    view! {
        <li class="todo-item" data-id=id.to_string()>
            {move || if is_editing() {
                view! { <TodoEditor id=id initial_text=text.clone() /> }.into_any()
            } else {
                view! {
                    <input
                        type="checkbox"
                        prop:checked=completed
                        on:change=move |_| ctx.toggle(id)
                    />
                    <span class=display::text_class(completed)>{text.clone()}</span>
                    <button class="edit-btn" on:click=move |_| ctx.begin_edit(id)>"Edit"</button>
                    <button class="delete-btn" on:click=move |_| ctx.delete(id)>"Delete"</button>
                }.into_any()
            }}
        </li>
    }
}
