use crate::domain::{Electronic, Grocery};
use crate::store_framework::{Entity, Stocked};

impl Entity for Electronic {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl Stocked for Electronic {
    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

impl Entity for Grocery {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl Stocked for Grocery {
    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}
