//! Infrastructure Layer
//!
//! Repository and blob-store implementations.

pub mod fs_store;
pub mod memory;
pub mod postgres;

pub use fs_store::{FsCvStore, UrlSigner};
pub use memory::{InMemoryCvStore, InMemoryProfileRepository};
pub use postgres::PgProfileRepository;
