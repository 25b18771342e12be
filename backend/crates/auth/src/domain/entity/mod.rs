//! Domain Entities

pub mod credential;

pub use credential::UserCredential;
