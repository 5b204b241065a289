//! Presentation Layer - HTTP Adapter
//!
//! Thin transport adapter over the use cases: DTOs, claimed-identity
//! extraction, handlers, and the router.

pub mod dto;
pub mod handlers;
pub mod identity;
pub mod router;
