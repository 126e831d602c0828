//! Equipment
//!
//! One optional item per slot; equipped items contribute additive
//! modifiers summed at read time.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Item, ItemCategory, ItemModifiers};

/// The four equipment slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Helmet,
    Armor,
    Belt,
}

impl EquipSlot {
    /// Slot for an item category, if it is equippable at all
    pub fn for_category(category: ItemCategory) -> Option<EquipSlot> {
        match category {
            ItemCategory::Weapon => Some(EquipSlot::Weapon),
            ItemCategory::Helmet => Some(EquipSlot::Helmet),
            ItemCategory::Armor => Some(EquipSlot::Armor),
            ItemCategory::Belt => Some(EquipSlot::Belt),
            _ => None,
        }
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EquipSlot::Weapon => "weapon",
            EquipSlot::Helmet => "helmet",
            EquipSlot::Armor => "armor",
            EquipSlot::Belt => "belt",
        };
        f.write_str(name)
    }
}

/// Items currently worn or wielded
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equipment {
    slots: HashMap<EquipSlot, Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self { slots: HashMap::new() }
    }

    /// Get item in a slot
    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Check if a slot is empty
    pub fn is_empty(&self, slot: EquipSlot) -> bool {
        !self.slots.contains_key(&slot)
    }

    /// Place an item into an empty slot. Callers check occupancy first;
    /// this never swaps.
    pub(crate) fn insert(&mut self, slot: EquipSlot, item: Item) {
        debug_assert!(self.is_empty(slot));
        self.slots.insert(slot, item);
    }

    /// Remove and return the item in a slot
    pub(crate) fn remove(&mut self, slot: EquipSlot) -> Option<Item> {
        self.slots.remove(&slot)
    }

    /// All equipped items
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.slots.values()
    }

    /// Sum an accessor over every equipped item's modifiers
    pub fn sum_by(&self, f: impl Fn(&ItemModifiers) -> i32) -> i32 {
        self.slots.values().map(|item| f(item.modifiers())).sum()
    }

    /// Total crit chance contribution
    pub fn critical_chance_bonus(&self) -> f32 {
        self.slots.values().map(|item| item.modifiers().critical_chance).sum()
    }
}
