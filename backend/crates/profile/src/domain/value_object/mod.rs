//! Domain Value Objects

pub mod object_key;

pub use object_key::ObjectKey;
