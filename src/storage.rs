//! Browser Storage Backend
//!
//! `KeyValueStore` over `window.localStorage`.

use todo_core::{DomainError, DomainResult, JsonRepository, KeyValueStore};
use wasm_bindgen::JsValue;

/// Repository used by the app: JSON in `localStorage`
pub type TodoRepository = JsonRepository<BrowserStorage>;

/// Handle to `window.localStorage`, resolved on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> DomainResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| DomainError::Internal("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Internal("localStorage is unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        // Fails when the quota is exceeded or storage is disabled.
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Internal(format!("{:?}", err))
}

pub fn todo_repository(storage_key: &str) -> TodoRepository {
    JsonRepository::new(BrowserStorage, storage_key)
}
