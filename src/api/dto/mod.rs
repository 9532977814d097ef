//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. They are decoupled from the domain entities.

pub mod clones;
pub mod health;
pub mod register;
