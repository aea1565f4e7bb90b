use crate::domain::{Patient, Prescription};
use crate::store_framework::{Entity, Stocked};

impl Entity for Patient {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl Entity for Prescription {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

/// Remaining doses are the prescription's stock.
impl Stocked for Prescription {
    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}
