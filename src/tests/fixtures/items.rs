// Shared test fixtures for the items module.

use crate::modules::items::adapters::outbound::item_repository_in_memory::InMemoryItemRepository;
use crate::modules::items::application::item_store::ItemStore;
use crate::modules::items::core::decide::CreateItem;
use crate::modules::items::core::quantity::Quantity;
use crate::shell::state::AppState;
use std::sync::Arc;

pub struct CreateItemBuilder {
    inner: CreateItem,
}

impl Default for CreateItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateItemBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateItem {
                name: Some("Milk".to_string()),
                quantity: Some(Quantity::from(2_i64)),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.inner.name = None;
        self
    }

    pub fn quantity(mut self, v: impl Into<Quantity>) -> Self {
        self.inner.quantity = Some(v.into());
        self
    }

    pub fn without_quantity(mut self) -> Self {
        self.inner.quantity = None;
        self
    }

    pub fn build(self) -> CreateItem {
        self.inner
    }
}

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(ItemStore::new(Arc::new(
        InMemoryItemRepository::new(),
    ))))
}

pub fn make_offline_state() -> AppState {
    let mut repository = InMemoryItemRepository::new();
    repository.toggle_offline();
    AppState::new(Arc::new(ItemStore::new(Arc::new(repository))))
}

#[cfg(test)]
mod create_item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = CreateItemBuilder::default().build();
        assert_eq!(built.name.as_deref(), Some("Milk"));
        assert_eq!(built.quantity, Some(Quantity::from(2_i64)));
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = CreateItemBuilder::new()
            .name("Bread")
            .quantity("1 loaf")
            .build();
        assert_eq!(built.name.as_deref(), Some("Bread"));
        assert_eq!(built.quantity, Some(Quantity::from("1 loaf")));

        let built = CreateItemBuilder::new()
            .without_name()
            .without_quantity()
            .build();
        assert_eq!(built, CreateItem::default());
    }
}
