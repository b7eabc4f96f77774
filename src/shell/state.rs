use crate::modules::items::application::item_store::ItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemStore>,
}

impl AppState {
    pub fn new(items: Arc<ItemStore>) -> Self {
        Self { items }
    }
}
