//! Core infrastructure: identity, entity trait, loading

pub mod entity;
pub mod identity;
pub mod loader;

pub use entity::Entity;
pub use identity::{EntityId, EntityPrefix, IdParseError};
