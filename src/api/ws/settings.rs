//! `settings` controller

use std::collections::BTreeSet;

use axum::{extract::State, http::StatusCode};

use crate::api::middleware::RequireSystemAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ResetSettingsRequest, SetSettingRequest};

/// Update a setting value
pub async fn set_setting(
    RequireSystemAdmin(user): RequireSystemAdmin,
    State(state): State<AppState>,
    Json(request): Json<SetSettingRequest>,
) -> Result<StatusCode, ApiError> {
    let key = request.key.trim();
    if key.is_empty() {
        return Err(ApiError::bad_request("The 'key' parameter is missing"));
    }

    state.settings_service.set(key, &request.value).await?;
    tracing::info!(login = %user.login(), key = %key, "Setting set");

    Ok(StatusCode::NO_CONTENT)
}

/// Remove setting values
pub async fn reset_settings(
    RequireSystemAdmin(user): RequireSystemAdmin,
    State(state): State<AppState>,
    Json(request): Json<ResetSettingsRequest>,
) -> Result<StatusCode, ApiError> {
    let keys: BTreeSet<String> = request
        .keys
        .iter()
        .map(|key| key.trim())
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect();

    let removed = state.settings_service.reset(&keys).await?;
    tracing::info!(login = %user.login(), removed, "Settings reset");

    Ok(StatusCode::NO_CONTENT)
}
