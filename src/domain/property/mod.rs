//! Property domain - global key/value settings persisted by administrators

mod entity;
mod repository;

pub use entity::{Property, PERMANENT_SERVER_ID};
pub use repository::PropertyStore;

#[cfg(test)]
pub use repository::MockPropertyStore;
