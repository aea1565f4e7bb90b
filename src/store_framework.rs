use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::StoreError;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain record must implement to be kept in a [`KeyedEntityStore`].
pub trait Entity: Clone {
    type Id: Eq + Hash + Clone + Display + Debug;

    /// Get the ID of the entity. Fixed at construction.
    fn id(&self) -> &Self::Id;
}

/// An entity carrying a mutable stock count.
pub trait Stocked: Entity {
    fn quantity(&self) -> i32;
    fn set_quantity(&mut self, quantity: i32);
}

// =============================================================================
// 2. THE GENERIC STORE
// =============================================================================

/// Single-owner, in-memory collection keyed by entity id.
///
/// Every failure is reported to the caller as a [`StoreError`]; nothing is
/// retried and a failed operation leaves the store untouched.
#[derive(Debug, Clone)]
pub struct KeyedEntityStore<T: Entity> {
    store: HashMap<T::Id, T>,
}

impl<T: Entity> Default for KeyedEntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> KeyedEntityStore<T> {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    /// Adds `item`, rejecting an id that is already present.
    pub fn insert(&mut self, item: T) -> Result<(), StoreError> {
        let id = item.id().clone();
        if self.store.contains_key(&id) {
            return Err(StoreError::DuplicateKey(id.to_string()));
        }
        self.store.insert(id, item);
        Ok(())
    }

    pub fn get_by_id(&self, id: &T::Id) -> Result<&T, StoreError> {
        self.store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Mutable handle to a stored entity. Changes are visible to later reads.
    pub fn get_by_id_mut(&mut self, id: &T::Id) -> Result<&mut T, StoreError> {
        self.store
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &T::Id) -> Result<T, StoreError> {
        self.store
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Owned snapshot of every entity, in no particular order.
    pub fn list_all(&self) -> Vec<T> {
        self.store.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.store.values()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.store.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<T: Stocked> KeyedEntityStore<T> {
    /// Sets the stock of `id`. The quantity is validated before the lookup.
    pub fn update_quantity(&mut self, id: &T::Id, quantity: i32) -> Result<(), StoreError> {
        if quantity < 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        let item = self.get_by_id_mut(id)?;
        item.set_quantity(quantity);
        Ok(())
    }
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        id: u32,
        label: String,
        quantity: i32,
    }

    impl Widget {
        fn new(id: u32, quantity: i32) -> Self {
            Self {
                id,
                label: format!("widget-{}", id),
                quantity,
            }
        }
    }

    impl Entity for Widget {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    impl Stocked for Widget {
        fn quantity(&self) -> i32 {
            self.quantity
        }

        fn set_quantity(&mut self, quantity: i32) {
            self.quantity = quantity;
        }
    }

    // --- Tests ---

    #[test]
    fn test_duplicate_insert_keeps_original() {
        let mut store = KeyedEntityStore::new();
        store.insert(Widget::new(1, 50)).unwrap();

        let mut imposter = Widget::new(1, 999);
        imposter.label = "imposter".into();
        let err = store.insert(imposter).unwrap_err();

        assert_eq!(err, StoreError::DuplicateKey("1".into()));
        let original = store.get_by_id(&1).unwrap();
        assert_eq!(original.label, "widget-1");
        assert_eq!(original.quantity, 50);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let mut store: KeyedEntityStore<Widget> = KeyedEntityStore::new();

        assert_eq!(store.get_by_id(&7).unwrap_err(), StoreError::NotFound("7".into()));
        assert_eq!(store.remove(&7).unwrap_err(), StoreError::NotFound("7".into()));
        assert!(store.get_by_id_mut(&7).is_err());
    }

    #[test]
    fn test_update_quantity_example() {
        let mut store = KeyedEntityStore::new();
        store.insert(Widget::new(1, 50)).unwrap();

        store.update_quantity(&1, 60).unwrap();
        assert_eq!(store.get_by_id(&1).unwrap().quantity, 60);

        let err = store.update_quantity(&1, -5).unwrap_err();
        assert_eq!(err, StoreError::InvalidQuantity(-5));
        assert_eq!(store.get_by_id(&1).unwrap().quantity, 60);
    }

    #[test]
    fn test_negative_quantity_checked_before_lookup() {
        let mut store: KeyedEntityStore<Widget> = KeyedEntityStore::new();

        assert_eq!(store.update_quantity(&3, -1).unwrap_err(), StoreError::InvalidQuantity(-1));
        assert_eq!(store.update_quantity(&3, 0).unwrap_err(), StoreError::NotFound("3".into()));
    }

    #[test]
    fn test_removed_entity_is_gone() {
        let mut store = KeyedEntityStore::new();
        store.insert(Widget::new(4, 1)).unwrap();

        let removed = store.remove(&4).unwrap();
        assert_eq!(removed.id, 4);
        assert!(!store.contains(&4));
        assert_eq!(store.get_by_id(&4).unwrap_err(), StoreError::NotFound("4".into()));
        assert_eq!(store.remove(&4).unwrap_err(), StoreError::NotFound("4".into()));
    }

    #[test]
    fn test_list_all_after_inserts_and_removals() {
        let mut store = KeyedEntityStore::new();
        for id in 1..=6 {
            store.insert(Widget::new(id, id as i32)).unwrap();
        }
        store.remove(&2).unwrap();
        store.remove(&5).unwrap();

        let mut ids: Vec<u32> = store.list_all().into_iter().map(|w| w.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_mutation_through_handle_is_visible() {
        let mut store = KeyedEntityStore::new();
        store.insert(Widget::new(9, 3)).unwrap();

        store.get_by_id_mut(&9).unwrap().label = "relabelled".into();

        assert_eq!(store.get_by_id(&9).unwrap().label, "relabelled");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = KeyedEntityStore::new();
        store.insert(Widget::new(1, 10)).unwrap();

        let snapshot = store.list_all();
        store.update_quantity(&1, 0).unwrap();

        assert_eq!(snapshot[0].quantity, 10);
        assert!(!store.is_empty());
    }
}
