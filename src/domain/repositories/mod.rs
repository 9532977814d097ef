//! Repository trait definitions for the domain layer.
//!
//! The registry never touches files directly; it goes through
//! [`CloneRepository`], implemented in `crate::infrastructure::persistence`.
//! Mock implementations are generated via `mockall` for unit tests.

pub mod clone_repository;

pub use clone_repository::CloneRepository;

#[cfg(test)]
pub use clone_repository::MockCloneRepository;
