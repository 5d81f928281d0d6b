//! User session resolved from the request token
//!
//! A token is read from either:
//! - Authorization header: `Bearer <token>`
//! - X-Auth-Token header: `<token>`
//!
//! Requests without a token get an anonymous session; permission checks then
//! fail with 401 while a logged-in user lacking the permission gets 403.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::GlobalPermission;
use crate::infrastructure::auth::AuthenticatedUser;

#[derive(Debug, Clone)]
pub enum UserSession {
    Anonymous,
    Authenticated(AuthenticatedUser),
}

impl UserSession {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, UserSession::Authenticated(_))
    }

    pub fn login(&self) -> Option<&str> {
        match self {
            UserSession::Anonymous => None,
            UserSession::Authenticated(user) => Some(user.login()),
        }
    }

    pub fn check_logged_in(&self) -> Result<&AuthenticatedUser, ApiError> {
        match self {
            UserSession::Anonymous => Err(ApiError::unauthorized("Authentication is required")),
            UserSession::Authenticated(user) => Ok(user),
        }
    }

    pub fn check_permission(&self, permission: GlobalPermission) -> Result<&AuthenticatedUser, ApiError> {
        let user = self.check_logged_in()?;

        if !user.has_permission(permission) {
            debug!(login = %user.login(), permission = %permission, "Permission denied");
            return Err(ApiError::forbidden("Insufficient privileges"));
        }

        Ok(user)
    }
}

impl FromRequestParts<AppState> for UserSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_token(&parts.headers)? else {
            return Ok(UserSession::Anonymous);
        };

        let user = state
            .authenticator
            .authenticate(&token)
            .ok_or_else(|| ApiError::unauthorized("Invalid authentication token"))?;

        debug!(login = %user.login(), "Authenticated request");
        Ok(UserSession::Authenticated(user.clone()))
    }
}

/// Extractor that requires the system administration permission
#[derive(Debug, Clone)]
pub struct RequireSystemAdmin(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireSystemAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = UserSession::from_request_parts(parts, state).await?;
        let user = session.check_permission(GlobalPermission::SystemAdmin)?;

        Ok(RequireSystemAdmin(user.clone()))
    }
}

fn extract_token(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(Some(token.trim().to_string()));
        }
    }

    if let Some(token_header) = headers.get("x-auth-token") {
        let token = token_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid X-Auth-Token header encoding"))?;

        return Ok(Some(token.trim().to_string()));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn admin() -> UserSession {
        UserSession::Authenticated(AuthenticatedUser::new("admin", [GlobalPermission::SystemAdmin]))
    }

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer tok-123".parse().unwrap());

        assert_eq!(extract_token(&headers).unwrap(), Some("tok-123".to_string()));
    }

    #[test]
    fn test_extract_x_auth_token() {
        let mut headers = HeaderMap::new();
        headers.insert("x-auth-token", " tok-456 ".parse().unwrap());

        assert_eq!(extract_token(&headers).unwrap(), Some("tok-456".to_string()));
    }

    #[test]
    fn test_bearer_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer bearer".parse().unwrap());
        headers.insert("x-auth-token", "header".parse().unwrap());

        assert_eq!(extract_token(&headers).unwrap(), Some("bearer".to_string()));
    }

    #[test]
    fn test_no_token_is_anonymous() {
        assert_eq!(extract_token(&HeaderMap::new()).unwrap(), None);
    }

    #[test]
    fn test_basic_auth_is_not_a_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        assert_eq!(extract_token(&headers).unwrap(), None);
    }

    #[test]
    fn test_anonymous_permission_check_is_unauthorized() {
        let err = UserSession::Anonymous
            .check_permission(GlobalPermission::SystemAdmin)
            .unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_missing_permission_is_forbidden() {
        let session =
            UserSession::Authenticated(AuthenticatedUser::new("scanner", [GlobalPermission::Scan]));
        let err = session.check_permission(GlobalPermission::SystemAdmin).unwrap_err();

        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.message(), "Insufficient privileges");
    }

    #[test]
    fn test_admin_passes_check() {
        let session = admin();

        assert!(session.is_logged_in());
        assert_eq!(session.login(), Some("admin"));
        assert!(session.check_permission(GlobalPermission::SystemAdmin).is_ok());
    }
}
