//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64)
//! - Salted password hashing (Argon2id with an explicit per-user salt)
//! - Signing-secret providers (static, env, HTTP backend, TTL cache)

pub mod crypto;
pub mod password;
pub mod secret;
