//! Infrastructure Layer
//!
//! Repository and authority implementations.

pub mod delegate;
pub mod local_authority;
pub mod memory;
pub mod postgres;

pub use delegate::RemoteTokenAuthority;
pub use local_authority::InProcessTokenAuthority;
pub use memory::InMemoryCredentialRepository;
pub use postgres::PgCredentialRepository;
