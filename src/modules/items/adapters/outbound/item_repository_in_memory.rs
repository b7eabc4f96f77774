use crate::modules::items::adapters::outbound::item_repository::{ItemRepository, RepositoryError};
use crate::modules::items::core::changes::ItemChanges;
use crate::modules::items::core::item::Item;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
    is_offline: bool,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Item repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn all(&self) -> Result<Vec<Item>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.items.read().await.clone())
    }

    async fn insert(&self, item: Item) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.items.write().await.push(item);
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Item>, RepositoryError> {
        self.ensure_online()?;
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned())
    }

    async fn update(
        &self,
        id: &str,
        changes: &ItemChanges,
    ) -> Result<Option<Item>, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.items.write().await;
        Ok(guard.iter_mut().find(|item| item.id == id).map(|item| {
            changes.apply_to(item);
            item.clone()
        }))
    }

    async fn remove(&self, id: &str) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.items.write().await;
        match guard.iter().position(|item| item.id == id) {
            Some(index) => {
                guard.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
