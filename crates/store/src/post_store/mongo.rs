use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use lupin_core::{Post, PostId};

use super::r#trait::{DeleteOutcome, InsertOutcome, PostStore, StoreError, UpdateOutcome};

/// Collection holding post documents.
const COLLECTION: &str = "post";

/// MongoDB-backed post store.
///
/// One client is built at startup and shared by every handler; the driver
/// manages connection pooling and is safe for concurrent use. Operations run
/// with the driver's own per-operation deadlines; there is no process-wide
/// shared timeout.
#[derive(Debug, Clone)]
pub struct MongoPostStore {
    collection: Collection<Post>,
}

impl MongoPostStore {
    /// Connect to `uri` and bind to the post collection of `database`.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::Backend(format!("connect: {e}")))?;
        tracing::debug!(database, collection = COLLECTION, "mongodb client ready");
        Ok(Self {
            collection: client.database(database).collection(COLLECTION),
        })
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn insert(&self, post: Post) -> Result<InsertOutcome, StoreError> {
        // The driver would generate an ObjectId `_id` for an id-less document;
        // assign the hex form up front instead so both store backends hand out
        // identifiers of the same shape.
        let id = post.id.unwrap_or_else(PostId::new);
        let post = post.with_id(id);
        self.collection
            .insert_one(&post)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(InsertOutcome { inserted_id: id })
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn find(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        self.collection
            .find_one(doc! { "_id": id.to_hex() })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn delete(&self, id: PostId) -> Result<DeleteOutcome, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_hex() })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn update_title(
        &self,
        id: PostId,
        title: Option<String>,
    ) -> Result<UpdateOutcome, StoreError> {
        let update = match title {
            Some(title) => doc! { "$set": { "title": title } },
            None => doc! { "$unset": { "title": "" } },
        };
        let result = self
            .collection
            .update_one(doc! { "_id": id.to_hex() }, update)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }
}
