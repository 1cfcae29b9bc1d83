//! Owned, ordered item collections.

use crate::describe::Describe;
use crate::item::Item;

/// Items carried by an actor, in pickup order.
#[derive(Debug, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.name() == name)?;
        Some(self.items.remove(pos))
    }

    /// Get an item by position.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Check whether an item with the given name is carried.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over carried items.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Names of carried items, in order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_query() {
        let mut inv = Inventory::new();
        assert!(inv.is_empty());

        inv.add(Item::new("Keycard", "A security keycard"));
        inv.add(Item::new("Datapad", "A tablet"));

        assert_eq!(inv.len(), 2);
        assert!(inv.contains("Keycard"));
        assert!(!inv.contains("Spacesuit"));
        assert_eq!(inv.names(), vec!["Keycard", "Datapad"]);
        assert_eq!(inv.get(1).map(|i| i.name()), Some("Datapad"));
        assert!(inv.get(2).is_none());
    }

    #[test]
    fn remove_by_name() {
        let mut inv = Inventory::new();
        inv.add(Item::new("Keycard", "A security keycard"));

        let removed = inv.remove("Keycard").unwrap();
        assert_eq!(removed.name(), "Keycard");
        assert!(inv.is_empty());
        assert!(inv.remove("Keycard").is_none());
    }
}
