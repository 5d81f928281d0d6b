//! Property store backends

mod factory;
mod in_memory;
mod postgres;

pub use factory::create_property_store;
pub use in_memory::InMemoryPropertyStore;
pub use postgres::{PostgresConfig, PostgresPropertyStore};
