//! `/counts`: read or clear the tally.

use axum::extract::State;
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};

use nametally_core::NametallyError;

use crate::app_state::AppState;
use crate::handlers::HandlerError;

/// GET returns the tally as an indented JSON array of `{name, count}`
/// objects; DELETE resets it. Snapshotting and serialization are separate
/// steps, so the counter lock is released before any encoding happens.
pub async fn counts(
    State(state): State<AppState>,
    method: Method,
) -> Result<Response, HandlerError> {
    if method == Method::GET {
        let snapshot = state.counter().snapshot();
        // Cannot fail for this data shape; handled anyway.
        let body = serde_json::to_string_pretty(&snapshot).map_err(|e| {
            tracing::error!(error = %e, "counts serialization failed");
            NametallyError::Internal(e.to_string())
        })?;
        Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
    } else if method == Method::DELETE {
        state.counter().clear();
        Ok("Count data has been removed.\n".into_response())
    } else {
        Err(NametallyError::MethodNotAllowed.into())
    }
}
