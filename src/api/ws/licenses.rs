//! `licenses` controller

use axum::extract::State;

use crate::api::middleware::RequireSystemAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ListLicensesResponse};

/// List license settings with their validation state
pub async fn list_licenses(
    _admin: RequireSystemAdmin,
    State(state): State<AppState>,
) -> Result<Json<ListLicensesResponse>, ApiError> {
    let licenses = state.license_service.list().await?;

    Ok(Json(ListLicensesResponse { licenses }))
}
