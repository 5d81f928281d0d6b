//! API request, response and error types

pub mod error;
pub mod json;
pub mod license;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use license::{ListLicensesResponse, ResetSettingsRequest, SetSettingRequest};
