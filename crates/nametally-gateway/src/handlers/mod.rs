//! Route handlers.
//!
//! - `/hello/{name}` : greeting + tally increment
//! - `/health`       : host resource stats
//! - `/counts`       : tally snapshot (GET) / tally reset (DELETE)

pub mod counts;
pub mod greet;
pub mod health;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use nametally_core::NametallyError;

/// Fixed 405 body, trailing newline included.
pub(crate) const INVALID_METHOD_BODY: &str = "Invalid request method.\n";

/// Adapter mapping `NametallyError` onto the wire contract.
pub struct HandlerError(pub NametallyError);

impl From<NametallyError> for HandlerError {
    fn from(err: NametallyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = match &self.0 {
            NametallyError::MethodNotAllowed => INVALID_METHOD_BODY.to_string(),
            // Error text as body, newline-terminated like the 405 path.
            NametallyError::BadRequest(msg) | NametallyError::Internal(msg) => {
                format!("{msg}\n")
            }
        };
        (status, body).into_response()
    }
}
