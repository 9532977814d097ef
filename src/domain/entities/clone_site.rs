//! Clone site entities.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Per-URL registration counts. A missing key means zero.
pub type RequestCounters = BTreeMap<String, u64>;

/// A clone that reported itself and is waiting for admin review.
///
/// Created the first time an unknown URL registers; never modified
/// afterwards. Approving or rejecting the URL removes the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub url: String,
    #[serde(deserialize_with = "deserialize_first_seen")]
    pub first_seen: DateTime<Utc>,
    pub discovered_by_ip: String,
}

impl QueueEntry {
    pub fn new(url: String, first_seen: DateTime<Utc>, discovered_by_ip: String) -> Self {
        Self {
            url,
            first_seen,
            discovered_by_ip,
        }
    }
}

/// Accepts RFC 3339 timestamps, and naive ISO-8601 timestamps (read as UTC)
/// written by older deployments.
fn deserialize_first_seen<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/// Result of a clone reporting itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Already approved; carries the counter value after this call.
    Approved { requests: u64 },
    /// Already waiting in the queue.
    Pending,
    /// First sighting, added to the queue.
    Queued,
}

impl Registration {
    /// Label used for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved { .. } => "approved",
            Self::Pending => "pending",
            Self::Queued => "queued",
        }
    }
}

/// One entry of the public approved list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedClone {
    pub url: String,
    pub requests: u64,
    pub is_original: bool,
}

/// Everything the admin dashboard needs to render itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminView {
    pub queue: Vec<QueueEntry>,
    /// Approved URLs in stored order.
    pub approved: Vec<String>,
    pub counters: RequestCounters,
    pub original_url: Option<String>,
}

impl AdminView {
    /// Counter value for `url`, zero when never counted.
    pub fn requests_for(&self, url: &str) -> u64 {
        self.counters.get(url).copied().unwrap_or(0)
    }

    /// Approved URLs ordered by request count, highest first.
    ///
    /// Ties keep their stored order. Rows equal to the original site are
    /// flagged so the dashboard can hide the kick action.
    pub fn ranked_approved(&self) -> Vec<ListedClone> {
        let mut rows: Vec<ListedClone> = self
            .approved
            .iter()
            .map(|url| ListedClone {
                url: url.clone(),
                requests: self.requests_for(url),
                is_original: self.original_url.as_deref() == Some(url.as_str()),
            })
            .collect();

        rows.sort_by(|a, b| b.requests.cmp(&a.requests));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_queue_entry_roundtrips_rfc3339() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let entry = QueueEntry::new("https://a.test".into(), ts, "10.0.0.1".into());

        let json = serde_json::to_string(&entry).unwrap();
        let back: QueueEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(back, entry);
    }

    #[test]
    fn test_queue_entry_accepts_naive_timestamp() {
        let raw = r#"{
            "url": "https://legacy.test",
            "first_seen": "2024-11-05T08:15:42.123456",
            "discovered_by_ip": "203.0.113.9"
        }"#;

        let entry: QueueEntry = serde_json::from_str(raw).unwrap();

        assert_eq!(entry.url, "https://legacy.test");
        assert_eq!(
            entry.first_seen.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-11-05 08:15:42"
        );
    }

    #[test]
    fn test_queue_entry_rejects_garbage_timestamp() {
        let raw = r#"{"url": "u", "first_seen": "yesterday", "discovered_by_ip": ""}"#;

        assert!(serde_json::from_str::<QueueEntry>(raw).is_err());
    }

    #[test]
    fn test_registration_labels() {
        assert_eq!(Registration::Approved { requests: 3 }.as_str(), "approved");
        assert_eq!(Registration::Pending.as_str(), "pending");
        assert_eq!(Registration::Queued.as_str(), "queued");
    }

    #[test]
    fn test_ranked_approved_orders_by_requests_and_flags_original() {
        let mut counters = RequestCounters::new();
        counters.insert("https://b.test".into(), 7);
        counters.insert("https://c.test".into(), 7);
        counters.insert("https://o.test".into(), 2);

        let view = AdminView {
            queue: vec![],
            approved: vec![
                "https://a.test".into(),
                "https://o.test".into(),
                "https://b.test".into(),
                "https://c.test".into(),
            ],
            counters,
            original_url: Some("https://o.test".into()),
        };

        let rows = view.ranked_approved();
        let urls: Vec<&str> = rows.iter().map(|r| r.url.as_str()).collect();

        assert_eq!(
            urls,
            vec!["https://b.test", "https://c.test", "https://o.test", "https://a.test"]
        );
        assert!(rows[2].is_original);
        assert!(!rows[0].is_original);
        assert_eq!(rows[3].requests, 0);
    }
}
