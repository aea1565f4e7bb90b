use serde::{Deserialize, Serialize};

/// A stock line persisted by the inventory log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl InventoryRecord {
    pub fn new(id: u32, name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}
