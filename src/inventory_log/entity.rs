use crate::domain::InventoryRecord;
use crate::store_framework::{Entity, Stocked};

impl Entity for InventoryRecord {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl Stocked for InventoryRecord {
    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}
