//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Every
/// variant is recoverable: the offending operation is a no-op and the caller
/// decides how to present the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stock quantity failed validation (e.g. adding zero or fewer bottles).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// An item with this name is already stocked.
    #[error("item already exists: {0}")]
    DuplicateName(String),

    /// A requested item was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. renaming an item into an existing name).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity(quantity)
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
