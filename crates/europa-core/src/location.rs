//! Places the player can stand in.
//!
//! A location maps interaction keys to response text and keeps the keys
//! in insertion order for menus. It never interprets the keys itself;
//! side effects belong to the game orchestrator.

use std::collections::HashMap;

use crate::describe::Describe;
use crate::item::Item;

/// Response for interaction keys the location does not know.
pub const NOTHING_HAPPENS: &str = "Nothing interesting happens.";

/// A place with interactions and items.
#[derive(Debug)]
pub struct Location {
    name: String,
    description: String,
    interaction_order: Vec<String>,
    responses: HashMap<String, String>,
    items: Vec<Item>,
}

impl Location {
    /// Create an empty location.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            interaction_order: Vec::new(),
            responses: HashMap::new(),
            items: Vec::new(),
        }
    }

    /// Register an interaction. Re-registering a key replaces its response.
    pub fn add_interaction(&mut self, key: impl Into<String>, response: impl Into<String>) {
        let key = key.into();
        if !self.responses.contains_key(&key) {
            self.interaction_order.push(key.clone());
        }
        self.responses.insert(key, response.into());
    }

    /// Builder form of [`Location::add_interaction`].
    pub fn with_interaction(mut self, key: impl Into<String>, response: impl Into<String>) -> Self {
        self.add_interaction(key, response);
        self
    }

    /// Interaction keys in the order they were added.
    pub fn interactions(&self) -> &[String] {
        &self.interaction_order
    }

    /// Look up the response for an interaction key.
    pub fn interact(&self, key: &str) -> &str {
        self.responses
            .get(key)
            .map(String::as_str)
            .unwrap_or(NOTHING_HAPPENS)
    }

    /// Place an item here.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Builder form of [`Location::add_item`].
    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    /// Items currently here.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Remove the first item with the given name, if present.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.name() == name)?;
        Some(self.items.remove(pos))
    }

    /// Remove the item at `index`, if in range.
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

impl Describe for Location {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal_room() -> Location {
        Location::new("Terminal Room", "A quiet room with a terminal.")
            .with_interaction("hack terminal", "Security has been alerted!")
            .with_interaction("examine terminal", "Various system diagnostics.")
            .with_item(Item::new("Keycard", "A security keycard"))
    }

    #[test]
    fn interactions_keep_insertion_order() {
        let room = terminal_room();
        assert_eq!(room.interactions(), ["hack terminal", "examine terminal"]);
    }

    #[test]
    fn interact_known_key() {
        let room = terminal_room();
        assert_eq!(room.interact("hack terminal"), "Security has been alerted!");
    }

    #[test]
    fn interact_unknown_key() {
        let room = terminal_room();
        assert_eq!(room.interact("dance"), NOTHING_HAPPENS);
    }

    #[test]
    fn replacing_interaction_does_not_duplicate_key() {
        let mut room = terminal_room();
        room.add_interaction("hack terminal", "The terminal is locked down.");
        assert_eq!(room.interactions().len(), 2);
        assert_eq!(room.interact("hack terminal"), "The terminal is locked down.");
    }

    #[test]
    fn remove_item_by_name() {
        let mut room = terminal_room();
        assert!(room.remove_item("Spacesuit").is_none());
        assert_eq!(room.items().len(), 1);

        let keycard = room.remove_item("Keycard").unwrap();
        assert_eq!(keycard.name(), "Keycard");
        assert!(room.items().is_empty());
    }

    #[test]
    fn take_item_by_index() {
        let mut room = terminal_room();
        assert!(room.take_item(5).is_none());
        assert!(room.take_item(0).is_some());
        assert!(room.take_item(0).is_none());
    }
}
