//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie management (Set-Cookie construction, request cookie extraction)
//! - Small cryptographic utilities (random bytes, Base64, constant-time compare)

pub mod cookie;
pub mod crypto;
