//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains the refresh protocol engine and the session lifecycle
//! use cases around it.

pub mod config;
pub mod establish;
pub mod logout;
pub mod refresh;
pub mod token;

pub use establish::{EstablishSessionInput, EstablishSessionUseCase, EstablishedSession};
pub use logout::{LogoutInput, LogoutUseCase};
pub use refresh::{RefreshInput, RefreshUseCase, RefreshedTokens};
