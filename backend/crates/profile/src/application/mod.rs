//! Application Layer

pub mod config;
pub mod cv;
pub mod get_profile;
pub mod put_profile;

pub use config::ProfileConfig;
pub use cv::{CvUrlUseCase, StoreCvUseCase};
pub use get_profile::GetProfileUseCase;
pub use put_profile::PutProfileUseCase;
