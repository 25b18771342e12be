//! Repository and Authority Traits
//!
//! Interfaces for data persistence and remote token verification.
//! Implementations live in the infrastructure layer.

use crate::domain::entity::UserCredential;
use crate::domain::value_object::UserName;
use crate::error::AuthResult;

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Conditional insert.
    ///
    /// Succeeds only if no record for the username exists; the check and
    /// the insert are a single atomic operation of the store. Returns
    /// `Ok(true)` when a record was inserted, `Ok(false)` when one already
    /// existed (the stored record is left untouched).
    async fn create_if_absent(&self, credential: &UserCredential) -> AuthResult<bool>;

    /// Find a credential record by username
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<UserCredential>>;
}

/// Token verification authority.
///
/// The seam the auth gate crosses for every protected request. In
/// production this is a remote call to the verification delegate; the gate
/// never verifies tokens inline, so the signing secret stays behind this
/// boundary. `None` means unauthenticated, whatever the cause — transport
/// failures included.
#[trait_variant::make(TokenAuthority: Send)]
pub trait LocalTokenAuthority {
    /// Resolve a bearer token to a username
    async fn authenticate(&self, token: &str) -> Option<String>;
}
