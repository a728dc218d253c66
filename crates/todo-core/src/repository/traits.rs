//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser storage, in-memory maps, etc.

use crate::domain::{Entity, DomainResult};

/// String key-value backend, shaped after the browser `Storage` API
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// Whole-collection repository
///
/// The collection is always read and written in one piece; there is no
/// per-entity access.
pub trait Repository<T: Entity> {
    /// Load the full collection (empty if nothing was saved yet)
    fn load(&self) -> DomainResult<Vec<T>>;

    /// Replace the stored collection
    fn save(&self, entities: &[T]) -> DomainResult<()>;
}
