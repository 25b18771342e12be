//! Profile Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database, filesystem, and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - General profile put/get, one record per user
//! - CV upload and presigned, expiring download URLs
//!
//! All routes are scoped to the authenticated caller; the auth gate
//! resolves the username before any handler here runs.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ProfileConfig;
pub use error::{ProfileError, ProfileResult};
pub use infra::fs_store::{FsCvStore, UrlSigner};
pub use infra::postgres::PgProfileRepository;
pub use presentation::files::files_router;
pub use presentation::router::profile_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgProfileRepository as ProfileStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
