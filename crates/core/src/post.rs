//! The post entity.

use serde::{Deserialize, Serialize};

use crate::id::PostId;

/// The sole entity exchanged between the HTTP boundary and the store.
///
/// Wire shape: `{"_id": "<hex>", "title": "...", "body": "..."}` with every
/// field omitted when absent. `id` is assigned by the store on insert and
/// immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PostId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Post {
    /// A post that has not been persisted yet (no id).
    pub fn draft(title: Option<String>, body: Option<String>) -> Self {
        Self {
            id: None,
            title,
            body,
        }
    }

    /// The same post addressed by `id`.
    pub fn with_id(mut self, id: PostId) -> Self {
        self.id = Some(id);
        self
    }
}
