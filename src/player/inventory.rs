//! Inventory
//!
//! A bounded ordered sequence of items. Consumables stack into an
//! existing entry; everything else takes its own slot.

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::error::InventoryError;

/// Default number of inventory slots
pub const DEFAULT_CAPACITY: usize = 24;

/// The player's item collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self { items: Vec::new(), capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots (a stack occupies one)
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by template id
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Add an item. Stackable items merge into an existing stack without
    /// consuming a slot; otherwise a free slot is required.
    pub fn add(&mut self, item: Item) -> Result<(), InventoryError> {
        if item.category().is_stackable() {
            if let Some(stack) = self.items.iter_mut().find(|i| i.id() == item.id()) {
                stack.quantity += item.quantity;
                return Ok(());
            }
        }
        if self.is_full() {
            return Err(InventoryError::Full);
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return a whole entry by template id
    pub fn take(&mut self, id: &str) -> Result<Item, InventoryError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id() == id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        Ok(self.items.remove(idx))
    }

    /// Decrement a stack by one, removing the entry at zero
    pub fn consume_one(&mut self, id: &str) -> Result<(), InventoryError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id() == id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        if self.items[idx].quantity > 1 {
            self.items[idx].quantity -= 1;
        } else {
            self.items.remove(idx);
        }
        Ok(())
    }

    /// Sum of an accessor over every carried item
    pub fn sum_by(&self, f: impl Fn(&Item) -> i32) -> i32 {
        self.items.iter().map(f).sum()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
