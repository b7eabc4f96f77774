use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::items::core::quantity::Quantity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub quantity: Quantity,
    pub purchased: bool,
}

impl Item {
    /// A fresh, not yet purchased item with a newly generated id.
    pub fn register(name: String, quantity: Quantity) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            name,
            quantity,
            purchased: false,
        }
    }
}
