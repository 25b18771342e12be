//! Domain Layer
//!
//! Entities, value objects, the token codec and the persistence/authority
//! traits.

pub mod entity;
pub mod repository;
pub mod token;
pub mod value_object;
