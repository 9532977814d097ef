//! Clone lifecycle and request counting.

use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::entities::{AdminView, ListedClone, QueueEntry, Registration};
use crate::domain::repositories::CloneRepository;
use crate::error::AppError;

/// The clone registry state machine.
///
/// Classifies self-reports, counts requests from approved clones, and
/// moves URLs between the queue and the approved set on admin request.
///
/// # Concurrency
///
/// Every mutating method runs its whole load-modify-save cycle under a
/// single writer lock, so concurrent registrations never lose counter
/// increments and concurrent admin actions never overwrite each other.
/// Read-only methods skip the lock; the store swaps documents atomically.
///
/// # Original site
///
/// When configured, the original site URL counts as approved whether or
/// not it is stored in the approved set, is listed first, and can never be
/// kicked.
pub struct RegistryService<R: CloneRepository> {
    repository: Arc<R>,
    original_url: Option<String>,
    write_lock: Mutex<()>,
}

impl<R: CloneRepository> RegistryService<R> {
    /// Creates a registry. An empty `original_url` is treated as unset.
    pub fn new(repository: Arc<R>, original_url: Option<String>) -> Self {
        Self {
            repository,
            original_url: original_url.filter(|url| !url.is_empty()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn original_url(&self) -> Option<&str> {
        self.original_url.as_deref()
    }

    fn is_original(&self, url: &str) -> bool {
        self.original_url.as_deref() == Some(url)
    }

    /// Handles a clone reporting itself.
    ///
    /// - Approved (or the original site): increments its counter and
    ///   returns the new value.
    /// - Already queued: returns [`Registration::Pending`] without changes.
    /// - Unknown: appends a [`QueueEntry`] stamped with the current time and
    ///   `reporter_ip`.
    ///
    /// URLs are compared by exact string equality.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn register(&self, url: &str, reporter_ip: &str) -> Result<Registration, AppError> {
        let _guard = self.write_lock.lock().await;

        let approved = self.repository.load_approved().await?;

        let outcome = if self.is_original(url) || approved.iter().any(|u| u == url) {
            let mut counters = self.repository.load_counters().await?;
            let count = counters.entry(url.to_string()).or_insert(0);
            *count = count.saturating_add(1);
            let requests = *count;

            self.repository.save_counters(&counters).await?;
            debug!(url, requests, "approved clone counted");

            Registration::Approved { requests }
        } else {
            let mut queue = self.repository.load_queue().await?;

            if queue.iter().any(|entry| entry.url == url) {
                Registration::Pending
            } else {
                queue.push(QueueEntry::new(
                    url.to_string(),
                    Utc::now(),
                    reporter_ip.to_string(),
                ));
                self.repository.save_queue(&queue).await?;
                info!(url, ip = reporter_ip, "new clone queued for review");

                Registration::Queued
            }
        };

        metrics::counter!("clone_registrations_total", "outcome" => outcome.as_str())
            .increment(1);

        Ok(outcome)
    }

    /// Public list of approved clones.
    ///
    /// The original site comes first with `is_original = true`; stored
    /// approved URLs follow in order, skipping any copy of the original.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn list_approved(&self) -> Result<Vec<ListedClone>, AppError> {
        let approved = self.repository.load_approved().await?;
        let counters = self.repository.load_counters().await?;
        let requests = |url: &str| counters.get(url).copied().unwrap_or(0);

        let mut clones = Vec::with_capacity(approved.len() + 1);

        if let Some(original) = self.original_url.as_deref() {
            clones.push(ListedClone {
                url: original.to_string(),
                requests: requests(original),
                is_original: true,
            });
        }

        clones.extend(
            approved
                .iter()
                .filter(|url| !self.is_original(url))
                .map(|url| ListedClone {
                    url: url.clone(),
                    requests: requests(url),
                    is_original: false,
                }),
        );

        Ok(clones)
    }

    /// Current queue, approved set and counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn admin_view(&self) -> Result<AdminView, AppError> {
        Ok(AdminView {
            queue: self.repository.load_queue().await?,
            approved: self.repository.load_approved().await?,
            counters: self.repository.load_counters().await?,
            original_url: self.original_url.clone(),
        })
    }

    /// Reports whether the backing store is usable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }

    /// Moves `url` from the queue into the approved set.
    ///
    /// Removes every queue entry for `url` and appends it to the approved
    /// set unless already present. Approving a URL that is not queued still
    /// approves it; repeating the call changes nothing.
    ///
    /// The approved set is saved before the queue. If the queue save fails
    /// the URL stays listed in both until `approve` or `reject` is retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty URL and
    /// [`AppError::Internal`] if the store fails.
    pub async fn approve(&self, url: &str) -> Result<AdminView, AppError> {
        ensure_url(url)?;
        let _guard = self.write_lock.lock().await;

        let mut queue = self.repository.load_queue().await?;
        let mut approved = self.repository.load_approved().await?;

        // Approved set is written first: a failed queue save leaves the URL
        // in both collections, which `register` already treats as approved.
        if !approved.iter().any(|u| u == url) {
            approved.push(url.to_string());
        }
        self.repository.save_approved(&approved).await?;

        queue.retain(|entry| entry.url != url);
        self.repository.save_queue(&queue).await?;

        info!(url, "clone approved");
        metrics::counter!("clone_admin_actions_total", "action" => "approve").increment(1);

        Ok(AdminView {
            queue,
            approved,
            counters: self.repository.load_counters().await?,
            original_url: self.original_url.clone(),
        })
    }

    /// Drops `url` from the queue. Idempotent; the approved set is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty URL and
    /// [`AppError::Internal`] if the store fails.
    pub async fn reject(&self, url: &str) -> Result<AdminView, AppError> {
        ensure_url(url)?;
        let _guard = self.write_lock.lock().await;

        let mut queue = self.repository.load_queue().await?;
        queue.retain(|entry| entry.url != url);
        self.repository.save_queue(&queue).await?;

        info!(url, "clone rejected");
        metrics::counter!("clone_admin_actions_total", "action" => "reject").increment(1);

        Ok(AdminView {
            queue,
            approved: self.repository.load_approved().await?,
            counters: self.repository.load_counters().await?,
            original_url: self.original_url.clone(),
        })
    }

    /// Removes `url` from the approved set. Its counter is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when `url` is the original site,
    /// [`AppError::Validation`] for an empty URL and [`AppError::Internal`]
    /// if the store fails.
    pub async fn kick(&self, url: &str) -> Result<AdminView, AppError> {
        if self.is_original(url) {
            return Err(AppError::forbidden(
                "Cannot kick original site",
                json!({ "url": url }),
            ));
        }
        ensure_url(url)?;
        let _guard = self.write_lock.lock().await;

        let mut approved = self.repository.load_approved().await?;
        approved.retain(|u| u != url);
        self.repository.save_approved(&approved).await?;

        info!(url, "clone kicked");
        metrics::counter!("clone_admin_actions_total", "action" => "kick").increment(1);

        Ok(AdminView {
            queue: self.repository.load_queue().await?,
            approved,
            counters: self.repository.load_counters().await?,
            original_url: self.original_url.clone(),
        })
    }
}

fn ensure_url(url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::bad_request(
            "Missing url field",
            json!({ "field": "url" }),
        ));
    }
    Ok(())
}
