//! `/health`: host resource statistics as one JSON object.

use axum::extract::State;
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use nametally_core::NametallyError;

use crate::app_state::AppState;
use crate::handlers::HandlerError;
use crate::stats::StatsError;

/// GET only. Queries the four stat sources independently and reports them
/// under fixed keys. A failed source serializes as `null` and is logged, so
/// the response is 200 with all four keys present even when the host is
/// partially unreadable.
pub async fn health(
    State(state): State<AppState>,
    method: Method,
) -> Result<Response, HandlerError> {
    if method != Method::GET {
        return Err(NametallyError::MethodNotAllowed.into());
    }

    let stats = state.stats();
    let report = serde_json::json!({
        "virtual_memory_info": reading("virtual_memory", stats.virtual_memory().await),
        "swap_memory_info": reading("swap_memory", stats.swap_memory().await),
        "cpu_info": reading("cpu_times", stats.cpu_times().await),
        "load": reading("load_avg", stats.load_avg().await),
    });

    let body = serde_json::to_string_pretty(&report).map_err(|e| {
        tracing::error!(error = %e, "health serialization failed");
        NametallyError::Internal(e.to_string())
    })?;
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        format!("{body}\n"),
    )
        .into_response())
}

/// One stat reading as JSON; failure becomes `null` plus a warning.
fn reading<T: Serialize>(source: &str, result: Result<T, StatsError>) -> Value {
    match result {
        Ok(value) => serde_json::to_value(value).unwrap_or_else(|e| {
            tracing::warn!(source, error = %e, "stat reading not serializable");
            Value::Null
        }),
        Err(e) => {
            tracing::warn!(source, error = %e, "stat query failed; reporting null");
            Value::Null
        }
    }
}
