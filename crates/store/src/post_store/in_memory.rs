use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use lupin_core::{Post, PostId};

use super::r#trait::{DeleteOutcome, InsertOutcome, PostStore, StoreError, UpdateOutcome};

/// In-memory post store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    documents: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<InsertOutcome, StoreError> {
        let id = post.id.unwrap_or_else(PostId::new);
        let mut documents = self.documents.write().map_err(|_| poisoned())?;
        documents.insert(id, post.with_id(id));
        Ok(InsertOutcome { inserted_id: id })
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let documents = self.documents.read().map_err(|_| poisoned())?;
        Ok(documents.values().cloned().collect())
    }

    async fn find(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        let documents = self.documents.read().map_err(|_| poisoned())?;
        Ok(documents.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<DeleteOutcome, StoreError> {
        let mut documents = self.documents.write().map_err(|_| poisoned())?;
        let deleted_count = u64::from(documents.remove(&id).is_some());
        Ok(DeleteOutcome { deleted_count })
    }

    async fn update_title(
        &self,
        id: PostId,
        title: Option<String>,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut documents = self.documents.write().map_err(|_| poisoned())?;
        match documents.get_mut(&id) {
            Some(post) => {
                let modified_count = u64::from(post.title != title);
                post.title = title;
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count,
                })
            }
            None => Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, body: &str) -> Post {
        Post::draft(Some(title.to_string()), Some(body.to_string()))
    }

    #[tokio::test]
    async fn insert_assigns_an_id_when_absent() {
        let store = InMemoryPostStore::new();
        let outcome = store.insert(draft("Hello", "World")).await.unwrap();

        let found = store.find(outcome.inserted_id).await.unwrap().unwrap();
        assert_eq!(found.id, Some(outcome.inserted_id));
        assert_eq!(found.title.as_deref(), Some("Hello"));
        assert_eq!(found.body.as_deref(), Some("World"));
    }

    #[tokio::test]
    async fn insert_keeps_a_caller_supplied_id() {
        let store = InMemoryPostStore::new();
        let id = PostId::new();
        let outcome = store.insert(draft("Hello", "World").with_id(id)).await.unwrap();
        assert_eq!(outcome.inserted_id, id);
    }

    #[tokio::test]
    async fn find_unknown_id_returns_none() {
        let store = InMemoryPostStore::new();
        assert_eq!(store.find(PostId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_the_document() {
        let store = InMemoryPostStore::new();
        let id = store.insert(draft("Hello", "World")).await.unwrap().inserted_id;

        let outcome = store.delete(id).await.unwrap();
        assert_eq!(outcome.deleted_count, 1);
        assert_eq!(store.find(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_of_an_unknown_id_reports_zero() {
        let store = InMemoryPostStore::new();
        let outcome = store.delete(PostId::new()).await.unwrap();
        assert_eq!(outcome.deleted_count, 0);
    }

    #[tokio::test]
    async fn update_title_leaves_body_untouched() {
        let store = InMemoryPostStore::new();
        let id = store.insert(draft("Hello", "World")).await.unwrap().inserted_id;

        let outcome = store
            .update_title(id, Some("Bye".to_string()))
            .await
            .unwrap();
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.modified_count, 1);

        let found = store.find(id).await.unwrap().unwrap();
        assert_eq!(found.title.as_deref(), Some("Bye"));
        assert_eq!(found.body.as_deref(), Some("World"));
    }

    #[tokio::test]
    async fn update_title_with_none_clears_the_title() {
        let store = InMemoryPostStore::new();
        let id = store.insert(draft("Hello", "World")).await.unwrap().inserted_id;

        store.update_title(id, None).await.unwrap();

        let found = store.find(id).await.unwrap().unwrap();
        assert_eq!(found.title, None);
        assert_eq!(found.body.as_deref(), Some("World"));
    }

    #[tokio::test]
    async fn update_title_of_an_unknown_id_matches_nothing() {
        let store = InMemoryPostStore::new();
        let outcome = store
            .update_title(PostId::new(), Some("Bye".to_string()))
            .await
            .unwrap();
        assert_eq!(outcome.matched_count, 0);
        assert_eq!(outcome.modified_count, 0);
    }

    #[tokio::test]
    async fn unchanged_title_counts_as_matched_but_not_modified() {
        let store = InMemoryPostStore::new();
        let id = store.insert(draft("Hello", "World")).await.unwrap().inserted_id;

        let outcome = store
            .update_title(id, Some("Hello".to_string()))
            .await
            .unwrap();
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.modified_count, 0);
    }

    #[tokio::test]
    async fn list_returns_every_inserted_document() {
        let store = InMemoryPostStore::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            let outcome = store
                .insert(draft(&format!("title-{i}"), &format!("body-{i}")))
                .await
                .unwrap();
            ids.push(outcome.inserted_id);
        }

        let mut listed: Vec<PostId> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id.unwrap())
            .collect();
        listed.sort_by_key(|id| id.to_hex());
        ids.sort_by_key(|id| id.to_hex());
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn list_of_an_empty_store_is_empty() {
        let store = InMemoryPostStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }
}
