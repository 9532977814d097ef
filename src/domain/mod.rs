//! Domain layer: clone registry entities and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Queue entries, registration outcomes, admin snapshots
//! - [`repositories`] - The [`repositories::CloneRepository`] trait implemented
//!   by the infrastructure layer
//!
//! # Lifecycle
//!
//! A clone moves through `queued -> approved -> removed`:
//!
//! 1. An unknown URL reporting itself becomes a [`entities::QueueEntry`]
//! 2. An admin approves it into the approved set, or rejects it
//! 3. An admin may later kick it out of the approved set
//!
//! Request counters live outside this lifecycle and are never reset.

pub mod entities;
pub mod repositories;
