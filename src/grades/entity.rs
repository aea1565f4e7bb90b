use crate::domain::Student;
use crate::store_framework::Entity;

impl Entity for Student {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}
