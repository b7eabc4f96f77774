// The item store owns the item collection through a repository handle and
// exposes the five list operations. Validation runs before any lookup, so an
// invalid update on an unknown id is reported as a validation failure.

use crate::modules::items::adapters::outbound::item_repository::ItemRepository;
use crate::modules::items::application::errors::ItemStoreError;
use crate::modules::items::core::changes::ItemChanges;
use crate::modules::items::core::decide::{CreateItem, decide_create, decide_update};
use crate::modules::items::core::item::Item;
use std::sync::Arc;

pub struct ItemStore {
    repository: Arc<dyn ItemRepository>,
}

impl ItemStore {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Item>, ItemStoreError> {
        Ok(self.repository.all().await?)
    }

    pub async fn create(&self, command: CreateItem) -> Result<Item, ItemStoreError> {
        let item = decide_create(command).inspect_err(|reason| {
            tracing::debug!(%reason, "item rejected");
        })?;
        self.repository.insert(item.clone()).await?;
        tracing::info!(item_id = %item.id, "item created");
        Ok(item)
    }

    pub async fn get(&self, id: &str) -> Result<Item, ItemStoreError> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: &str, changes: ItemChanges) -> Result<Item, ItemStoreError> {
        let changes = decide_update(changes).inspect_err(|reason| {
            tracing::debug!(item_id = %id, %reason, "item update rejected");
        })?;
        let item = self
            .repository
            .update(id, &changes)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(item_id = %item.id, "item updated");
        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ItemStoreError> {
        if !self.repository.remove(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(item_id = %id, "item deleted");
        Ok(())
    }
}

fn not_found(id: &str) -> ItemStoreError {
    tracing::debug!(item_id = %id, "item not found");
    ItemStoreError::NotFound { id: id.to_string() }
}
