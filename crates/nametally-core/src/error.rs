//! Shared error type across nametally crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, NametallyError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum NametallyError {
    /// Request used an HTTP method the route does not accept.
    #[error("Invalid request method.")]
    MethodNotAllowed,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl NametallyError {
    /// Map internal error to a stable client-facing HTTP status.
    pub fn status(&self) -> u16 {
        match self {
            NametallyError::MethodNotAllowed => 405,
            NametallyError::BadRequest(_) => 400,
            NametallyError::Internal(_) => 500,
        }
    }
}
