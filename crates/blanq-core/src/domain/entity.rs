//! Domain Layer - Core Entity Trait
//!
//! Every record kept by the dashboard implements this trait.

use serde::{Deserialize, Serialize};

/// Identifier shared by all in-memory records (timestamp millis for new ones)
pub type RecordId = u64;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> RecordId;

    /// Replace the identifier (used when a repository assigns one)
    fn set_id(&mut self, id: RecordId);
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Implements `Entity` for a struct with a `pub id: RecordId` field
macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::domain::Entity for $ty {
                fn id(&self) -> $crate::domain::RecordId {
                    self.id
                }

                fn set_id(&mut self, id: $crate::domain::RecordId) {
                    self.id = id;
                }
            }
        )+
    };
}

pub(crate) use impl_entity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::NotFound("client 7".to_string());
        assert_eq!(err.to_string(), "Not found: client 7");
    }

    #[test]
    fn test_json_error_maps_to_internal() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: DomainError = parse.unwrap_err().into();
        assert!(matches!(err, DomainError::Internal(_)));
    }
}
