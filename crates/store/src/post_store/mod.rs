//! Post persistence: the store trait plus its in-memory and MongoDB
//! implementations.

pub mod in_memory;
pub mod mongo;
pub mod r#trait;

pub use in_memory::InMemoryPostStore;
pub use mongo::MongoPostStore;
pub use r#trait::{DeleteOutcome, InsertOutcome, PostStore, StoreError, UpdateOutcome};
