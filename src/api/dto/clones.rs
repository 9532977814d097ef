//! DTOs for the public approved-clone list.

use serde::Serialize;

use crate::domain::entities::ListedClone;

#[derive(Debug, Serialize)]
pub struct ClonesResponse {
    pub clones: Vec<CloneItem>,
}

/// One approved clone with its request count.
#[derive(Debug, Serialize)]
pub struct CloneItem {
    pub url: String,
    pub requests: u64,
    pub is_original: bool,
}

impl From<ListedClone> for CloneItem {
    fn from(clone: ListedClone) -> Self {
        Self {
            url: clone.url,
            requests: clone.requests,
            is_original: clone.is_original,
        }
    }
}
