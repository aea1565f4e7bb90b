use crate::domain::{Account, TransactionRecord};
use crate::store_framework::Entity;

impl Entity for Account {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl Entity for TransactionRecord {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}
