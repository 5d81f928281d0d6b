//! Web service error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error categories reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    AuthenticationError,
    PermissionError,
    NotFoundError,
    MethodNotAllowedError,
    ServerError,
    ServiceUnavailableError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::PermissionError => write!(f, "permission_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::MethodNotAllowedError => write!(f, "method_not_allowed_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::ServiceUnavailableError => write!(f, "service_unavailable_error"),
        }
    }
}

/// Error body: `{"errors": [{"msg": ..., "type": ...}]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                errors: vec![ApiErrorDetail {
                    msg: message.into(),
                    error_type,
                }],
            },
        }
    }

    /// First error message
    pub fn message(&self) -> &str {
        self.response
            .errors
            .first()
            .map(|e| e.msg.as_str())
            .unwrap_or_default()
    }

    pub fn error_type(&self) -> Option<ApiErrorType> {
        self.response.errors.first().map(|e| e.error_type)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorType::AuthenticationError, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, ApiErrorType::PermissionError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorType::MethodNotAllowedError,
            message,
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ServiceUnavailableError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Configuration { message } => Self::internal(message),
            DomainError::Storage { message } => {
                tracing::error!(error = %message, "Property store failure");
                Self::internal(message)
            }
            DomainError::Internal { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error_type() {
            Some(error_type) => write!(f, "{}: {}", error_type, self.message()),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Missing parameter 'key'");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), Some(ApiErrorType::InvalidRequestError));
        assert_eq!(err.message(), "Missing parameter 'key'");
    }

    #[test]
    fn test_domain_error_conversion() {
        let not_found: ApiError = DomainError::not_found("Setting not defined").into();
        let invalid: ApiError = DomainError::validation("empty").into();
        let storage: ApiError = DomainError::storage("down").into();

        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(storage.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::method_not_allowed("HTTP method POST is required");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "errors": [{
                    "msg": "HTTP method POST is required",
                    "type": "method_not_allowed_error"
                }]
            })
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::forbidden("Insufficient privileges");
        assert_eq!(err.to_string(), "permission_error: Insufficient privileges");
    }

    #[test]
    fn test_all_error_types() {
        assert_eq!(ApiError::bad_request("").status, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::unauthorized("").status, StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::forbidden("").status, StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("").status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::method_not_allowed("").status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::internal("").status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::unavailable("").status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
