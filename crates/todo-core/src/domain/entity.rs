//! Entity trait and domain errors
//!
//! Anything a `Repository` stores is an `Entity` keyed by its id. Errors
//! from list mutations and storage share one `DomainError`.

/// A stored record identified by a unique id
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::NotFound("todo 7".into()).to_string(), "Not found: todo 7");
        assert_eq!(DomainError::InvalidInput("empty text".into()).to_string(), "Invalid input: empty text");
        assert_eq!(DomainError::Internal("boom".into()).to_string(), "Internal error: boom");
    }
}
