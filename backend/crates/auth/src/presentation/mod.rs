//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the session-gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
