//! Infrastructure Layer
//!
//! PostgreSQL session store and SMTP breach notifier.

pub mod postgres;
pub mod smtp;
