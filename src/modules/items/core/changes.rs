use serde::Deserialize;

use crate::modules::items::core::item::Item;
use crate::modules::items::core::quantity::Quantity;

/// Partial replacement of an item's mutable fields.
///
/// `name` and `quantity` only count as supplied when truthy; `purchased`
/// counts whenever present, `false` included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub quantity: Option<Quantity>,
    pub purchased: Option<bool>,
}

impl ItemChanges {
    /// Drops the empty name and the falsy quantity.
    pub fn effective(self) -> Self {
        Self {
            name: self.name.filter(|name| !name.is_empty()),
            quantity: self.quantity.filter(Quantity::is_truthy),
            purchased: self.purchased,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.purchased.is_none()
    }

    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(quantity) = &self.quantity {
            item.quantity = quantity.clone();
        }
        if let Some(purchased) = self.purchased {
            item.purchased = purchased;
        }
    }
}
