use async_trait::async_trait;
use thiserror::Error;

use crate::modules::items::core::changes::ItemChanges;
use crate::modules::items::core::item::Item;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Storage of items. Implementations serialise writes so that `update`
/// looks up and mutates an item in one step.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn insert(&self, item: Item) -> Result<(), RepositoryError>;
    async fn find(&self, id: &str) -> Result<Option<Item>, RepositoryError>;
    async fn update(&self, id: &str, changes: &ItemChanges)
    -> Result<Option<Item>, RepositoryError>;
    async fn remove(&self, id: &str) -> Result<bool, RepositoryError>;
}
