//! Presentation Layer
//!
//! HTTP handlers, DTOs, routers, and the auth gate middleware.

pub mod delegate;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
