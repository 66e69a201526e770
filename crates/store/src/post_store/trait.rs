use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lupin_core::{Post, PostId};

/// Result of inserting a post: the identifier the store assigned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOutcome {
    pub inserted_id: PostId,
}

/// Result of a delete by id.
///
/// `deleted_count == 0` means no document matched; that is a success, not an
/// error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Result of an update by id.
///
/// `matched_count` is how many documents the filter addressed (0 or 1),
/// `modified_count` how many actually changed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Store operation error.
///
/// Backend-agnostic: implementations map their driver errors into these
/// variants. Missing documents are not errors; they surface as `None` or a
/// zero count on the operation itself.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation (I/O, connection,
    /// server-side failure).
    #[error("store backend error: {0}")]
    Backend(String),

    /// A stored document could not be decoded into a `Post`.
    #[error("document decode failed: {0}")]
    Decode(String),
}

/// Persistence seam for the post collection.
///
/// One document collection addressed by [`PostId`]. Implementations must be
/// safe for concurrent use by multiple handlers sharing a single instance.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert `post` as a new document, assigning an id when it has none.
    async fn insert(&self, post: Post) -> Result<InsertOutcome, StoreError>;

    /// Full-collection scan: every document, no filter, natural order.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// Find the single document whose identifier equals `id`.
    async fn find(&self, id: PostId) -> Result<Option<Post>, StoreError>;

    /// Delete the single document matching `id`.
    async fn delete(&self, id: PostId) -> Result<DeleteOutcome, StoreError>;

    /// Set the `title` field only on the matching document. No other field is
    /// ever written by this operation.
    async fn update_title(
        &self,
        id: PostId,
        title: Option<String>,
    ) -> Result<UpdateOutcome, StoreError>;
}

#[async_trait]
impl<S> PostStore for Arc<S>
where
    S: PostStore + ?Sized,
{
    async fn insert(&self, post: Post) -> Result<InsertOutcome, StoreError> {
        (**self).insert(post).await
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        (**self).list().await
    }

    async fn find(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        (**self).find(id).await
    }

    async fn delete(&self, id: PostId) -> Result<DeleteOutcome, StoreError> {
        (**self).delete(id).await
    }

    async fn update_title(
        &self,
        id: PostId,
        title: Option<String>,
    ) -> Result<UpdateOutcome, StoreError> {
        (**self).update_title(id, title).await
    }
}
