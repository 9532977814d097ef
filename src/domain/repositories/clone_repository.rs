//! Repository trait for the three registry collections.

use crate::domain::entities::{QueueEntry, RequestCounters};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for the clone registry.
///
/// Each collection is loaded and saved as a whole; there are no partial
/// updates. Loading a collection that was never saved yields an empty
/// value. A save must replace the previous content atomically so that a
/// concurrent load sees either the old or the new document.
///
/// Implementations do not serialize read-modify-write cycles; the caller
/// (see [`crate::application::services::RegistryService`]) holds the
/// writer lock.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonCloneRepository`] - JSON documents on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CloneRepository: Send + Sync {
    /// Loads the approved URLs in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O errors or a corrupt document.
    async fn load_approved(&self) -> Result<Vec<String>, AppError>;

    /// Replaces the approved set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O errors.
    async fn save_approved(&self, approved: &[String]) -> Result<(), AppError>;

    /// Loads the pending queue in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O errors or a corrupt document.
    async fn load_queue(&self) -> Result<Vec<QueueEntry>, AppError>;

    /// Replaces the pending queue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O errors.
    async fn save_queue(&self, queue: &[QueueEntry]) -> Result<(), AppError>;

    /// Loads the request counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O errors or a corrupt document.
    async fn load_counters(&self) -> Result<RequestCounters, AppError>;

    /// Replaces the request counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O errors.
    async fn save_counters(&self, counters: &RequestCounters) -> Result<(), AppError>;

    /// Reports whether the backing storage is usable.
    async fn health_check(&self) -> bool;
}
