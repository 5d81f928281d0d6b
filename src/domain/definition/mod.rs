//! Setting definitions declared by the hosting system

mod entity;
mod registry;

pub use entity::{PropertyDefinition, PropertyType};
pub use registry::PropertyDefinitions;
