use std::sync::Arc;

use lupin_core::{Post, PostId};
use lupin_store::{
    DeleteOutcome, InMemoryPostStore, InsertOutcome, MongoPostStore, PostStore, StoreError,
    UpdateOutcome,
};

/// Store wiring shared by every handler.
///
/// Built once at startup and injected via `Extension`; handlers never touch
/// global state, and every store call uses the backend's own per-operation
/// deadlines.
#[derive(Clone)]
pub enum AppServices {
    InMemory { store: Arc<InMemoryPostStore> },
    Mongo { store: Arc<MongoPostStore> },
}

/// Select and build the store backend from the environment.
///
/// `USE_MONGO_STORE=true` connects to MongoDB (`MONGODB_URI`,
/// `MONGODB_DATABASE`); anything else wires the in-memory store (dev/test).
pub async fn build_services() -> Result<AppServices, StoreError> {
    let use_mongo = std::env::var("USE_MONGO_STORE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_mongo {
        let uri =
            std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database = std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "lupin".to_string());
        let store = MongoPostStore::connect(&uri, &database).await?;
        return Ok(AppServices::Mongo {
            store: Arc::new(store),
        });
    }

    tracing::info!("using in-memory post store (set USE_MONGO_STORE=true for mongodb)");
    Ok(AppServices::in_memory())
}

impl AppServices {
    /// In-memory wiring (dev default; also used by the black-box tests).
    pub fn in_memory() -> Self {
        Self::InMemory {
            store: Arc::new(InMemoryPostStore::new()),
        }
    }

    pub async fn insert_post(&self, post: Post) -> Result<InsertOutcome, StoreError> {
        match self {
            AppServices::InMemory { store } => store.insert(post).await,
            AppServices::Mongo { store } => store.insert(post).await,
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        match self {
            AppServices::InMemory { store } => store.list().await,
            AppServices::Mongo { store } => store.list().await,
        }
    }

    pub async fn get_post(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        match self {
            AppServices::InMemory { store } => store.find(id).await,
            AppServices::Mongo { store } => store.find(id).await,
        }
    }

    pub async fn delete_post(&self, id: PostId) -> Result<DeleteOutcome, StoreError> {
        match self {
            AppServices::InMemory { store } => store.delete(id).await,
            AppServices::Mongo { store } => store.delete(id).await,
        }
    }

    pub async fn update_post_title(
        &self,
        id: PostId,
        title: Option<String>,
    ) -> Result<UpdateOutcome, StoreError> {
        match self {
            AppServices::InMemory { store } => store.update_title(id, title).await,
            AppServices::Mongo { store } => store.update_title(id, title).await,
        }
    }
}
