use serde::Deserialize;

use lupin_core::Post;
use lupin_store::{DeleteOutcome, InsertOutcome};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /add`. The id is never accepted from the client; the store
/// assigns it.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl CreatePostRequest {
    pub fn into_post(self) -> Post {
        Post::draft(self.title, self.body)
    }
}

/// Body of `PUT /update`. `_id` addresses the document; only `title` is
/// applied — a supplied `body` is echoed back but never persisted.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn insert_outcome_to_json(outcome: InsertOutcome) -> serde_json::Value {
    serde_json::json!({ "inserted_id": outcome.inserted_id.to_hex() })
}

pub fn delete_outcome_to_json(outcome: DeleteOutcome) -> serde_json::Value {
    serde_json::json!({ "deleted_count": outcome.deleted_count })
}
