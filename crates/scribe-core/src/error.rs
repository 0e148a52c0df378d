//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("{0}")]
    Validation(String),

    /// A unique field collided with an existing record.
    #[error("{field} Already Taken")]
    Conflict { field: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Incorrect Details")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => DomainError::InvalidCredentials,
            AuthError::HashingError(msg) => DomainError::Internal(msg),
            AuthError::MissingAuth | AuthError::TokenExpired | AuthError::InvalidToken(_) => {
                DomainError::Unauthorized
            }
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    /// Unique constraint violation on the named field (`Email`, `Title`, ...).
    #[error("Duplicate value for {field}")]
    Duplicate { field: String },
}

impl RepoError {
    /// Lift a store failure into the domain, naming the entity for `NotFound`.
    pub fn into_domain(self, entity_type: &'static str, id: i64) -> DomainError {
        match self {
            RepoError::NotFound => DomainError::NotFound { entity_type, id },
            RepoError::Duplicate { field } => DomainError::Conflict { field },
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                tracing::error!(entity = entity_type, "Store failure: {}", msg);
                DomainError::Internal(msg)
            }
        }
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => DomainError::Internal("Entity vanished".to_string()),
            RepoError::Duplicate { field } => DomainError::Conflict { field },
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                tracing::error!("Store failure: {}", msg);
                DomainError::Internal(msg)
            }
        }
    }
}
