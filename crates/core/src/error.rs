//! Domain-level error type.
//!
//! [`CoreError`] covers every failure the domain layer can surface. The API
//! crate maps each variant to an HTTP status code in its `AppError` type.

use crate::types::DbId;

/// Domain-level error shared by all crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by ID found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed validation before touching persistence.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request conflicts with existing state (duplicate natural key).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
