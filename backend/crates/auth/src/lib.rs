//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations and the delegate client
//! - `presentation/` - HTTP handlers, DTOs, routers, auth gate
//!
//! ## Features
//! - User signup/signin with username + password
//! - Signed bearer tokens carried in the `X-Formwork-Token` header
//! - Token verification delegated to a standalone service
//! - Auth gate middleware for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, one fresh salt per record
//! - Unknown usernames and wrong passwords are indistinguishable (403)
//! - Token signatures are checked before any claim is read
//! - Signing secret fetched from a backend at use, never baked in

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{TokenOutcome, VerifyTokenUseCase};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgCredentialRepository;
pub use presentation::delegate::delegate_router;
pub use presentation::router::auth_router;

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
    pub use crate::infra::postgres::PgCredentialRepository as CredentialStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
