//! Application Context
//!
//! Mutations shared with every component via the Leptos Context API.
//! Saving and edit-mode bookkeeping live in `TodoSession`; this layer
//! only writes through the store and logs rejected input.

use leptos::prelude::*;
use todo_core::DomainError;

use crate::store::{AppStateStoreFields, AppStore};

/// App-wide mutations, provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: AppStore,
}

impl TodoContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Add a todo from raw input. Returns `true` if it was added.
    pub fn add(&self, text: &str) -> bool {
        let result = self.store.session().write().add(text, now_ms());
        match result {
            Ok(_) => true,
            Err(e) => {
                log::debug!("[STORE] Add ignored: {}", e);
                false
            }
        }
    }

    pub fn delete(&self, id: u64) {
        let result = self.store.session().write().delete(id);
        if let Err(e) = result {
            log::warn!("[STORE] Delete failed: {}", e);
        }
    }

    pub fn toggle(&self, id: u64) {
        let result = self.store.session().write().toggle(id);
        if let Err(e) = result {
            log::warn!("[STORE] Toggle failed: {}", e);
        }
    }

    pub fn begin_edit(&self, id: u64) {
        self.store.session().write().begin_edit(id);
    }

    pub fn cancel_edit(&self) {
        self.store.session().write().cancel_edit();
    }

    /// Apply edited text and leave edit mode. Empty text keeps the old one.
    pub fn commit_edit(&self, id: u64, text: &str) {
        let result = self.store.session().write().commit_edit(id, text);
        match result {
            Ok(_) => {}
            Err(DomainError::InvalidInput(msg)) => log::debug!("[STORE] Edit ignored: {}", msg),
            Err(e) => log::warn!("[STORE] Edit failed: {}", e),
        }
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    use_context::<TodoContext>().expect("TodoContext should be provided")
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
