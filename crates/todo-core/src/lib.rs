//! To-Do Core
//!
//! Layered like the UI expects it:
//! - domain: `TodoItem` and the error types
//! - list: the ordered in-memory sequence and its mutations
//! - repository: whole-collection persistence over a key-value store
//! - session: list + edit state, saving after every mutation

pub mod domain;
pub mod list;
pub mod repository;
pub mod session;

pub use domain::{normalize_text, DomainError, DomainResult, Entity, TodoItem};
pub use list::TodoList;
pub use repository::{JsonRepository, KeyValueStore, MemoryStore, Repository};
pub use session::TodoSession;
