//! Todo Editor Component
//!
//! Inline editor that replaces a row's content while editing.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::use_todo_context;

/// Text input + Save button. Enter saves, Escape cancels.
#[component]
pub fn TodoEditor(id: u64, initial_text: String) -> impl IntoView {
    let ctx = use_todo_context();

    let (draft, set_draft) = signal(initial_text);
    let input_ref = NodeRef::<Input>::new();

    // Focus once the input is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                log::debug!("[APP] Could not focus editor for todo {}: {:?}", id, e);
            }
        }
    });

    let save = move || ctx.commit_edit(id, &draft.get_untracked());

    view! {
        <input
            type="text"
            class="edit-input"
            node_ref=input_ref
            prop:value=move || draft.get()
            on:input=move |ev| set_draft.set(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => save(),
                "Escape" => ctx.cancel_edit(),
                _ => {}
            }
        />
        <button class="save-btn" on:click=move |_| save()>"Save"</button>
    }
}
