//! HTTP verb guard for web service actions

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};

use crate::api::types::ApiError;
use crate::api::ws::WsAction;

/// Rejects a request whose verb the action does not accept
pub fn verify_request(action: &WsAction, method: &Method) -> Result<(), ApiError> {
    if action.is_post() && *method != Method::POST {
        return Err(ApiError::method_not_allowed("HTTP method POST is required"));
    }

    Ok(())
}

/// Route layer running [`verify_request`] before authentication and the handler
pub async fn verb_guard_middleware(
    State(action): State<WsAction>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    verify_request(&action, request.method())?;
    Ok(next.run(request).await)
}
