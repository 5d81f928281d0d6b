//! Token authentication

mod token;

pub use token::{hash_token, AuthenticatedUser, TokenAuthenticator};
