pub mod account;
pub mod inventory;
pub mod inventory_record;
pub mod patient;
pub mod student;

pub use account::*;
pub use inventory::*;
pub use inventory_record::*;
pub use patient::*;
pub use student::*;
