//! `lupin-store` — persistence layer for the post collection.

pub mod post_store;

pub use post_store::{
    DeleteOutcome, InMemoryPostStore, InsertOutcome, MongoPostStore, PostStore, StoreError,
    UpdateOutcome,
};
