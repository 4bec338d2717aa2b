//! Domain and repository error types.

use thiserror::Error;

/// Failures raised by domain services (validation, feed and follow logic).
#[derive(Debug, Error)]
pub enum DomainError {
    /// Submitted content was rejected; the message is shown to the user.
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
