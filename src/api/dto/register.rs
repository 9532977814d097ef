//! DTOs for the clone self-registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Registration;

/// Body sent by a clone site announcing itself.
///
/// `name` is the clone's URL. It is an opaque key: no URL format checks are
/// applied, only presence and a length cap.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1, max = 2048))]
    pub name: Option<String>,
}

/// Registration outcome.
///
/// Serialized with a `status` discriminator:
///
/// ```json
/// {"status": "approved", "requests": 12}
/// {"status": "pending"}
/// {"status": "queued"}
/// ```
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RegisterResponse {
    Approved { requests: u64 },
    Pending,
    Queued,
}

impl From<Registration> for RegisterResponse {
    fn from(outcome: Registration) -> Self {
        match outcome {
            Registration::Approved { requests } => Self::Approved { requests },
            Registration::Pending => Self::Pending,
            Registration::Queued => Self::Queued,
        }
    }
}
