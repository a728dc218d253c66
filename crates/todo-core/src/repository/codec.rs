//! JSON codec for stored collections

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{DomainError, DomainResult};

/// Serialize a collection as a JSON array
pub fn encode<T: Serialize>(entities: &[T]) -> DomainResult<String> {
    serde_json::to_string(entities).map_err(|e| DomainError::Internal(format!("encode failed: {}", e)))
}

/// Parse a stored JSON array. A literal `null` decodes as empty.
pub fn decode<T: DeserializeOwned>(raw: &str) -> DomainResult<Vec<T>> {
    serde_json::from_str::<Option<Vec<T>>>(raw)
        .map(Option::unwrap_or_default)
        .map_err(|e| DomainError::Internal(format!("stored data is malformed: {}", e)))
}
