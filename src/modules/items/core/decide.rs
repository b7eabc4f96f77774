use serde::Deserialize;

use crate::modules::items::core::changes::ItemChanges;
use crate::modules::items::core::item::Item;
use crate::modules::items::core::quantity::Quantity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Name and quantity are required")]
    MissingNameOrQuantity,

    #[error("At least one field (name, quantity, or purchased) must be provided")]
    NoChanges,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateItem {
    pub name: Option<String>,
    pub quantity: Option<Quantity>,
}

pub fn decide_create(command: CreateItem) -> Result<Item, DecideError> {
    match (command.name, command.quantity) {
        (Some(name), Some(quantity)) if !name.is_empty() && quantity.is_truthy() => {
            Ok(Item::register(name, quantity))
        }
        _ => Err(DecideError::MissingNameOrQuantity),
    }
}

pub fn decide_update(changes: ItemChanges) -> Result<ItemChanges, DecideError> {
    let changes = changes.effective();
    if changes.is_empty() {
        return Err(DecideError::NoChanges);
    }
    Ok(changes)
}
