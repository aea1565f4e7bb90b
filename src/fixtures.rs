//! Sample records shared by the unit and integration tests.

use crate::domain::{Electronic, Grocery, InventoryRecord};

pub fn laptop(id: u32, quantity: i32) -> Electronic {
    Electronic::new(id, "Laptop", "Lenovo", 24, 899.99, quantity)
}

pub fn milk(id: u32, quantity: i32) -> Grocery {
    Grocery::new(id, "Milk", "2026-11-02", 1.25, quantity)
}

pub fn paper(id: u32, quantity: i32) -> InventoryRecord {
    InventoryRecord::new(id, "Printer Paper", quantity, 4.5)
}

/// Grade file with one line of each kind of defect.
pub const MIXED_GRADE_FILE: &str = "\
1,Alice Johnson,92
2,Bob Smith,78
3,Carla Diaz
4,Dev Patel,abc
2,Bob Again,88
5,Eun-ji Park,64
6,Farid Khan,105
";
