//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RegistryError`] via `#[from]` (no `String` variants).

/// Top-level error for the student registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record was looked up by id and does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A record with the same id already exists.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The storage layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` must not be empty.
    #[error("name must not be empty")]
    EmptyName,

    /// `program` must not be empty.
    #[error("program must not be empty")]
    EmptyProgram,

    /// `cgpa` must be a finite, non-negative number.
    #[error("cgpa must be a finite, non-negative number")]
    InvalidCgpa,
}

/// Lookup by id found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Name of the record kind, e.g. `"Student"`.
    pub entity: &'static str,
    /// The id that was looked up.
    pub id: String,
}

/// A create collided with an existing record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} already exists")]
pub struct ConflictError {
    /// Name of the record kind, e.g. `"Student"`.
    pub entity: &'static str,
    /// The id that was already taken.
    pub id: String,
}
