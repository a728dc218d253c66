//! New Todo Form Component
//!
//! Text input plus Add button. Enter in the input submits too.

use leptos::prelude::*;

use crate::context::use_todo_context;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=create_todo>
            <input
                id="todo-input"
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button id="add-button" type="submit">"Add"</button>
        </form>
    }
}
