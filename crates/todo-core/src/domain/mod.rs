//! Domain Layer
//!
//! Contains the domain entity and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod todo;

pub use entity::{Entity, DomainError, DomainResult};
pub use todo::{normalize_text, TodoItem};
