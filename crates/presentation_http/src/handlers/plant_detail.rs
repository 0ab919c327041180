//! Plant detail handler

use application::LookupRequest;
use axum::{Json, body::Bytes, extract::State};
use domain::LookupResult;
use serde_json::Value;
use tracing::{error, warn};

use crate::{error::ApiError, state::AppState};

/// Look up common plants and environment details for a location
///
/// The body is read as raw JSON rather than through `Json<T>` so that a
/// non-object or field-less body reaches validation and yields the lookup's
/// own 400 message.
pub async fn plant_detail(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LookupResult>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "Failed to parse plant detail request body");
        ApiError::Internal(e.to_string())
    })?;

    let request = LookupRequest::from(payload);

    match state.lookup_service.lookup(&request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) if e.is_client_error() => {
            warn!(error = %e, "Rejected plant detail request");
            Err(e.into())
        },
        Err(e) => {
            error!(error = %e, "Error fetching plant information");
            Err(e.into())
        },
    }
}
