use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::todo::Todo;

pub mod database;
#[cfg(test)]
pub mod memory;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    #[error("mongo: no documents in result")]
    NotFound,

    #[error("insert did not return an ObjectId")]
    MissingInsertedId,
}

/// The five primitive operations the handlers issue against the todo
/// collection. Each method is a single round trip to the store.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Fails with [`StoreError::NotFound`] when no document matches.
    async fn find_by_id(&self, id: ObjectId) -> Result<Todo, StoreError>;

    async fn insert(&self, todo: &Todo) -> Result<ObjectId, StoreError>;

    /// Sets `body` and `completed` on the matching document. Succeeds even
    /// when nothing matched.
    async fn update_fields(&self, id: ObjectId, body: &str, completed: bool) -> Result<(), StoreError>;

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), StoreError>;
}
