//! Domain Entities

pub mod profile;

pub use profile::{Address, GeneralProfile, SUPPORTED_COUNTRIES};
