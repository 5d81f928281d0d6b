//! API middleware components

pub mod logging;
pub mod security;
pub mod session;
pub mod verb;

pub use logging::logging_middleware;
pub use security::security_headers_middleware;
pub use session::{RequireSystemAdmin, UserSession};
pub use verb::{verb_guard_middleware, verify_request};
