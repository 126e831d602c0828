//! Player state
//!
//! The mutable character: resource pools, position, inventory, equipment,
//! and read-time effective stats.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Item, ItemCategory};
use crate::combat::CombatantStats;
use crate::error::{ContentError, InventoryError};
use crate::progression::{ActiveEffect, ActiveEffects, Resource};

use super::equipment::{EquipSlot, Equipment};
use super::inventory::Inventory;

/// How many ticks a consumable stat buff lasts
const BUFF_DURATION_TICKS: u32 = 30;

/// Accumulated passive bonuses, applied additively at read time and never
/// baked into base stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PassiveBonuses {
    pub critical_chance: f32,
    /// Added to loot drop chances
    pub find_chance: f32,
    pub xp: f32,
}

/// An entry in the active quest list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

/// The player character, created from a class template and mutated by
/// movement, combat, and item use over one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub class_id: String,
    pub icon: char,
    pub race: String,
    pub hp: Resource,
    pub energy: Resource,
    /// Base stats from the class; effective values come from accessors
    stats: CombatantStats,
    pub x: i32,
    pub y: i32,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub quests: Vec<Quest>,
    pub bonuses: PassiveBonuses,
    pub effects: ActiveEffects,
}

impl Player {
    /// Create a character from a class template, with its starting items
    pub fn from_class(catalog: &Catalog, class_id: &str, name: &str) -> Result<Self, ContentError> {
        let class = catalog.class(class_id)?;
        let mut inventory = Inventory::default();
        for (item_id, quantity) in &class.starting_items {
            let item = catalog.instantiate_item(item_id, *quantity)?;
            if inventory.add(item).is_err() {
                return Err(ContentError::OversizedKit(class.id.clone()));
            }
        }
        Ok(Self {
            name: name.to_string(),
            class_id: class.id.clone(),
            icon: class.icon,
            race: class.race.clone(),
            hp: Resource::new(class.max_hp),
            energy: Resource::new(class.max_energy),
            stats: class.stats,
            x: 0,
            y: 0,
            inventory,
            equipment: Equipment::new(),
            quests: vec![Quest {
                id: "wayfarer".to_string(),
                name: "Find your footing in the wilds".to_string(),
                completed: false,
            }],
            bonuses: PassiveBonuses::default(),
            effects: ActiveEffects::default(),
        })
    }

    /// Effective attack: base + equipment + active effects
    pub fn attack(&self) -> i32 {
        self.stats.attack + self.equipment.sum_by(|m| m.attack) + self.effects.attack_bonus()
    }

    /// Effective defense: base + equipment + active effects
    pub fn defense(&self) -> i32 {
        self.stats.defense + self.equipment.sum_by(|m| m.defense) + self.effects.defense_bonus()
    }

    /// Effective crit chance: base + equipment + passive bonus
    pub fn critical_chance(&self) -> f32 {
        self.stats.critical_chance
            + self.equipment.critical_chance_bonus()
            + self.bonuses.critical_chance
    }

    /// Effective stats snapshot handed to the combat resolver
    pub fn combat_stats(&self) -> CombatantStats {
        CombatantStats {
            attack: self.attack(),
            magic_attack: self.stats.magic_attack + self.equipment.sum_by(|m| m.magic_attack),
            defense: self.defense(),
            armor: self.stats.armor,
            magic_resist: self.stats.magic_resist,
            evasion: self.stats.evasion,
            critical_chance: self.critical_chance(),
        }
    }

    /// Energy regen bonus from every carried and equipped item
    pub fn energy_regen_bonus(&self) -> i32 {
        self.inventory.sum_by(|i| i.modifiers().energy_regen_bonus)
            + self.equipment.sum_by(|m| m.energy_regen_bonus)
    }

    /// Move an inventory item into its equipment slot. Fails without any
    /// state change when the item is not equipment, is restricted to
    /// another class, or the slot is occupied; there is no implicit swap.
    pub fn equip(&mut self, item_id: &str) -> Result<EquipSlot, InventoryError> {
        let item = self
            .inventory
            .get(item_id)
            .ok_or_else(|| InventoryError::NotFound(item_id.to_string()))?;
        let slot = EquipSlot::for_category(item.category())
            .ok_or_else(|| InventoryError::NotEquippable(item_id.to_string()))?;
        let restriction = &item.template.class_restriction;
        if !restriction.is_empty() && !restriction.contains(&self.class_id) {
            return Err(InventoryError::NotEquippable(item_id.to_string()));
        }
        if !self.equipment.is_empty(slot) {
            return Err(InventoryError::SlotOccupied(slot));
        }
        let item = self.inventory.take(item_id)?;
        self.equipment.insert(slot, item);
        Ok(slot)
    }

    /// Move a slot's item back into inventory; requires free capacity
    pub fn unequip(&mut self, slot: EquipSlot) -> Result<String, InventoryError> {
        if self.equipment.is_empty(slot) {
            return Err(InventoryError::NotFound(slot.to_string()));
        }
        if self.inventory.is_full() {
            return Err(InventoryError::Full);
        }
        let Some(item) = self.equipment.remove(slot) else {
            return Err(InventoryError::NotFound(slot.to_string()));
        };
        let id = item.id().to_string();
        self.inventory.add(item)?;
        Ok(id)
    }

    /// Consume one charge of a consumable: restore hp and/or register a
    /// timed stat effect, then decrement the stack.
    pub fn use_item(&mut self, item_id: &str) -> Result<UseEffect, InventoryError> {
        let item = self
            .inventory
            .get(item_id)
            .ok_or_else(|| InventoryError::NotFound(item_id.to_string()))?;
        if item.category() != ItemCategory::Consumable {
            return Err(InventoryError::NotConsumable(item_id.to_string()));
        }
        let mods = *item.modifiers();
        let name = item.name().to_string();

        if mods.hp_restore > 0 {
            self.hp.restore(mods.hp_restore);
        }
        let buffed = mods.attack != 0 || mods.defense != 0;
        if buffed {
            self.effects.add(ActiveEffect {
                name: name.clone(),
                attack_bonus: mods.attack,
                defense_bonus: mods.defense,
                remaining_ticks: BUFF_DURATION_TICKS,
            });
        }
        self.inventory.consume_one(item_id)?;
        Ok(UseEffect { name, hp_restored: mods.hp_restore.max(0), buffed })
    }

    /// Pick an item up off a tile, subject to capacity
    pub fn pick_up(&mut self, item: Item) -> Result<(), InventoryError> {
        self.inventory.add(item)
    }
}

/// What using a consumable did, for messages
#[derive(Debug, Clone, PartialEq)]
pub struct UseEffect {
    pub name: String,
    pub hp_restored: i32,
    pub buffed: bool,
}
