//! Domain Layer
//!
//! Session entity, value objects, and repository traits.
//! No trust decisions live here; accept/reject logic belongs to the
//! application layer.

pub mod entity;
pub mod repository;
pub mod value_object;
