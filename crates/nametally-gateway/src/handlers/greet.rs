//! `/hello/{name}`: greet the caller and tally the name.

use axum::extract::{Path, State};
use axum::http::Method;
use axum::response::{IntoResponse, Response};

use nametally_core::NametallyError;

use crate::app_state::AppState;
use crate::handlers::HandlerError;

/// GET only. The name is the decoded path suffix; it may be empty and is
/// used verbatim — no validation or sanitization beyond the transport's
/// percent-decoding. The increment runs after the response is assembled so
/// the counter lock is never held across response work.
pub async fn greet(
    State(state): State<AppState>,
    method: Method,
    name: Option<Path<String>>,
) -> Result<Response, HandlerError> {
    if method != Method::GET {
        return Err(NametallyError::MethodNotAllowed.into());
    }

    let name = name.map(|Path(n)| n).unwrap_or_default();
    let response = format!("Hello, {name}!").into_response();
    state.counter().increment(&name);
    Ok(response)
}
