//! Infrastructure layer - storage backends, authentication and services

pub mod auth;
pub mod logging;
pub mod property;
pub mod services;
