//! Electronics and grocery stock kept in two keyed stores.

pub mod entity;

use tracing::{debug, info, instrument};

use crate::domain::{Electronic, Grocery};
use crate::error::StoreError;
use crate::store_framework::{KeyedEntityStore, Stocked};

/// Stock held by a small shop, one store per product family.
#[derive(Debug, Default)]
pub struct Inventory {
    electronics: KeyedEntityStore<Electronic>,
    groceries: KeyedEntityStore<Grocery>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed sample stock used by the demo.
    pub fn sample() -> Result<Self, StoreError> {
        let mut inventory = Self::new();
        inventory.add_electronic(Electronic::new(1, "Laptop", "Lenovo", 24, 899.99, 50))?;
        inventory.add_electronic(Electronic::new(2, "Headphones", "Sony", 12, 149.50, 120))?;
        inventory.add_electronic(Electronic::new(3, "Smartphone", "Samsung", 24, 699.00, 8))?;
        inventory.add_grocery(Grocery::new(101, "Milk", "2026-11-02", 1.25, 40))?;
        inventory.add_grocery(Grocery::new(102, "Bread", "2026-10-25", 2.10, 15))?;
        inventory.add_grocery(Grocery::new(103, "Apples", "2026-11-15", 0.45, 200))?;
        Ok(inventory)
    }

    #[instrument(fields(id = item.id, name = %item.name), skip(self, item))]
    pub fn add_electronic(&mut self, item: Electronic) -> Result<(), StoreError> {
        debug!("Adding electronic item");
        self.electronics.insert(item)
    }

    #[instrument(fields(id = item.id, name = %item.name), skip(self, item))]
    pub fn add_grocery(&mut self, item: Grocery) -> Result<(), StoreError> {
        debug!("Adding grocery item");
        self.groceries.insert(item)
    }

    pub fn electronic(&self, id: u32) -> Result<&Electronic, StoreError> {
        self.electronics.get_by_id(&id)
    }

    pub fn grocery(&self, id: u32) -> Result<&Grocery, StoreError> {
        self.groceries.get_by_id(&id)
    }

    #[instrument(skip(self))]
    pub fn restock_electronic(&mut self, id: u32, quantity: i32) -> Result<(), StoreError> {
        self.electronics.update_quantity(&id, quantity)?;
        info!("Electronic stock updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn restock_grocery(&mut self, id: u32, quantity: i32) -> Result<(), StoreError> {
        self.groceries.update_quantity(&id, quantity)?;
        info!("Grocery stock updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn remove_electronic(&mut self, id: u32) -> Result<Electronic, StoreError> {
        let item = self.electronics.remove(&id)?;
        info!(name = %item.name, "Electronic removed");
        Ok(item)
    }

    #[instrument(skip(self))]
    pub fn remove_grocery(&mut self, id: u32) -> Result<Grocery, StoreError> {
        let item = self.groceries.remove(&id)?;
        info!(name = %item.name, "Grocery removed");
        Ok(item)
    }

    /// Electronics ordered by id.
    pub fn electronics(&self) -> Vec<Electronic> {
        let mut items = self.electronics.list_all();
        items.sort_by_key(|item| item.id);
        items
    }

    /// Groceries ordered by id.
    pub fn groceries(&self) -> Vec<Grocery> {
        let mut items = self.groceries.list_all();
        items.sort_by_key(|item| item.id);
        items
    }

    /// Sum of price times quantity across both families.
    pub fn total_value(&self) -> f64 {
        let electronics: f64 = self
            .electronics
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum();
        let groceries: f64 = self
            .groceries
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum();
        electronics + groceries
    }

    /// Names of items with fewer than `threshold` units, sorted.
    pub fn low_stock(&self, threshold: i32) -> Vec<String> {
        let mut names: Vec<String> = self
            .electronics
            .iter()
            .filter(|item| item.quantity() < threshold)
            .map(|item| item.name.clone())
            .chain(
                self.groceries
                    .iter()
                    .filter(|item| item.quantity() < threshold)
                    .map(|item| item.name.clone()),
            )
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{laptop, milk};

    #[test]
    fn test_sample_inventory() {
        let inventory = Inventory::sample().unwrap();
        assert_eq!(inventory.electronics().len(), 3);
        assert_eq!(inventory.groceries().len(), 3);
        assert_eq!(inventory.electronic(1).unwrap().brand, "Lenovo");
        assert_eq!(inventory.grocery(102).unwrap().expiry_date, "2026-10-25");
    }

    #[test]
    fn test_families_are_keyed_independently() {
        let mut inventory = Inventory::new();
        inventory.add_electronic(laptop(1, 5)).unwrap();
        inventory.add_grocery(milk(1, 5)).unwrap();

        assert_eq!(
            inventory.add_electronic(laptop(1, 9)),
            Err(StoreError::DuplicateKey("1".into()))
        );
        assert_eq!(inventory.electronic(1).unwrap().quantity, 5);
    }

    #[test]
    fn test_restock_and_reject_negative() {
        let mut inventory = Inventory::new();
        inventory.add_electronic(laptop(1, 50)).unwrap();

        inventory.restock_electronic(1, 60).unwrap();
        assert_eq!(inventory.electronic(1).unwrap().quantity, 60);

        assert_eq!(inventory.restock_electronic(1, -5), Err(StoreError::InvalidQuantity(-5)));
        assert_eq!(inventory.electronic(1).unwrap().quantity, 60);
        assert_eq!(inventory.restock_grocery(42, 3), Err(StoreError::NotFound("42".into())));
    }

    #[test]
    fn test_remove_then_lookup() {
        let mut inventory = Inventory::new();
        inventory.add_grocery(milk(7, 10)).unwrap();

        let removed = inventory.remove_grocery(7).unwrap();
        assert_eq!(removed.name, "Milk");
        assert_eq!(inventory.grocery(7), Err(StoreError::NotFound("7".into())));
        assert!(inventory.remove_electronic(7).is_err());
    }

    #[test]
    fn test_total_value_and_low_stock() {
        let mut inventory = Inventory::new();
        inventory.add_electronic(Electronic::new(1, "Radio", "Acme", 6, 20.0, 2)).unwrap();
        inventory.add_grocery(Grocery::new(2, "Eggs", "2026-12-01", 0.5, 30)).unwrap();
        inventory.add_grocery(Grocery::new(3, "Butter", "2026-12-01", 3.0, 1)).unwrap();

        assert!((inventory.total_value() - 58.0).abs() < 1e-9);
        assert_eq!(inventory.low_stock(5), vec!["Butter".to_string(), "Radio".to_string()]);
    }
}
