//! File-backed persistence.
//!
//! - [`JsonFileStore`] - Whole-document JSON storage with atomic replace
//! - [`JsonCloneRepository`] - [`crate::domain::repositories::CloneRepository`]
//!   on top of [`JsonFileStore`]

pub mod json_clone_repository;
pub mod json_file_store;

pub use json_clone_repository::JsonCloneRepository;
pub use json_file_store::{Collection, JsonFileStore, StoreError};
