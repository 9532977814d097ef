//! Core entities of the clone registry.
//!
//! - [`QueueEntry`] - A reported clone awaiting review
//! - [`Registration`] - Outcome of a self-report
//! - [`ListedClone`] - One row of the public approved list
//! - [`AdminView`] - Snapshot rendered by the admin dashboard

pub mod clone_site;

pub use clone_site::{AdminView, ListedClone, QueueEntry, Registration, RequestCounters};
