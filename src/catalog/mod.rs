//! Content catalog
//!
//! The static registry of item, monster, and class templates plus the
//! terrain spawn tables. Built once at startup and passed by reference to
//! the generator and combat code; there is no ambient global lookup.

pub mod classes;
pub mod items;
pub mod loader;
pub mod monsters;
pub mod spawn_tables;

pub use classes::{default_class_templates, ClassTemplate, ClassTemplates};
pub use items::{
    default_item_templates, Item, ItemCategory, ItemModifiers, ItemTemplate, ItemTemplates, Rarity,
};
pub use monsters::{
    default_monster_templates, LootEntry, Monster, MonsterTemplate, MonsterTemplates,
};
pub use spawn_tables::{default_spawn_tables, SpawnEntry, SpawnTables};

use crate::error::ContentError;
use crate::world::Terrain;

/// The process-wide, read-only content registry
#[derive(Debug, Clone)]
pub struct Catalog {
    items: ItemTemplates,
    monsters: MonsterTemplates,
    classes: ClassTemplates,
    spawn: SpawnTables,
}

impl Catalog {
    pub fn new(
        items: ItemTemplates,
        monsters: MonsterTemplates,
        classes: ClassTemplates,
        spawn: SpawnTables,
    ) -> Self {
        Self { items, monsters, classes, spawn }
    }

    /// Catalog built from the hardcoded default content set
    pub fn default_content() -> Self {
        Self::new(
            default_item_templates(),
            default_monster_templates(),
            default_class_templates(),
            default_spawn_tables(),
        )
    }

    /// Look up an item template by id
    pub fn item(&self, id: &str) -> Result<&ItemTemplate, ContentError> {
        self.items.find(id).ok_or_else(|| ContentError::UnknownItem(id.to_string()))
    }

    /// Clone a template into an item instance with the given stack size
    pub fn instantiate_item(&self, id: &str, quantity: u32) -> Result<Item, ContentError> {
        let template = self.item(id)?.clone();
        Ok(Item { template, quantity: quantity.max(1) })
    }

    /// Look up a monster template by id
    pub fn monster(&self, id: &str) -> Result<&MonsterTemplate, ContentError> {
        self.monsters.find(id).ok_or_else(|| ContentError::UnknownMonster(id.to_string()))
    }

    /// Instantiate a monster at a tile. The instance id is derived from
    /// template id and coordinates so repeated generation with the same
    /// seed reproduces identical instances.
    pub fn spawn_monster(&self, id: &str, x: i32, y: i32) -> Result<Monster, ContentError> {
        let template = self.monster(id)?.clone();
        let current_hp = template.max_hp;
        Ok(Monster {
            instance_id: format!("{id}@{x},{y}"),
            template,
            current_hp,
        })
    }

    /// Look up a class template by id
    pub fn class(&self, id: &str) -> Result<&ClassTemplate, ContentError> {
        self.classes.find(id).ok_or_else(|| ContentError::UnknownClass(id.to_string()))
    }

    pub fn classes(&self) -> &[ClassTemplate] {
        &self.classes.templates
    }

    /// Ordered monster spawn entries for a terrain (empty for
    /// non-spawnable terrain, never absent)
    pub fn monster_spawns(&self, terrain: Terrain) -> &[SpawnEntry] {
        self.spawn.monsters_for(terrain)
    }

    /// Ordered item spawn entries for a terrain
    pub fn item_spawns(&self, terrain: Terrain) -> &[SpawnEntry] {
        self.spawn.items_for(terrain)
    }

    /// Check every id referenced by spawn tables, loot tables, and class
    /// starting kits. Run once after loading; afterwards unknown-id
    /// errors are a programming bug, not a runtime condition.
    pub fn validate(&self) -> Result<(), ContentError> {
        for terrain in Terrain::ALL {
            for entry in self.monster_spawns(terrain) {
                self.monster(&entry.content_id)?;
            }
            for entry in self.item_spawns(terrain) {
                self.item(&entry.content_id)?;
            }
        }
        for monster in &self.monsters.templates {
            for entry in &monster.loot_table {
                self.item(&entry.item_id)?;
            }
        }
        for class in &self.classes.templates {
            // Each kit entry occupies at most one inventory slot.
            if class.starting_items.len() > crate::player::DEFAULT_CAPACITY {
                return Err(ContentError::OversizedKit(class.id.clone()));
            }
            for (item_id, _) in &class.starting_items {
                self.item(item_id)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_validates() {
        assert!(Catalog::default_content().validate().is_ok());
    }

    #[test]
    fn test_unknown_ids_fail() {
        let catalog = Catalog::default_content();
        assert_eq!(
            catalog.item("gilded_crown").unwrap_err(),
            ContentError::UnknownItem("gilded_crown".to_string())
        );
        assert_eq!(
            catalog.monster("gilded_drake").unwrap_err(),
            ContentError::UnknownMonster("gilded_drake".to_string())
        );
        assert!(catalog.class("bard").is_err());
    }

    #[test]
    fn test_instantiate_item_stamps_quantity() {
        let catalog = Catalog::default_content();
        let item = catalog.instantiate_item("healing_draught", 3).unwrap();
        assert_eq!(item.id(), "healing_draught");
        assert_eq!(item.quantity, 3);
        // Quantity is always at least one
        assert_eq!(catalog.instantiate_item("worn_sword", 0).unwrap().quantity, 1);
    }

    #[test]
    fn test_spawn_monster_derives_instance_id() {
        let catalog = Catalog::default_content();
        let a = catalog.spawn_monster("grey_wolf", 3, 7).unwrap();
        let b = catalog.spawn_monster("grey_wolf", 3, 7).unwrap();
        assert_eq!(a.instance_id, "grey_wolf@3,7");
        assert_eq!(a, b);
        assert_eq!(a.current_hp, a.template.max_hp);
    }

    #[test]
    fn test_validate_rejects_oversized_starting_kit() {
        let mut classes = default_class_templates();
        classes.templates[0].starting_items = (0..=crate::player::DEFAULT_CAPACITY)
            .map(|_| ("worn_sword".to_string(), 1))
            .collect();
        let catalog = Catalog::new(
            default_item_templates(),
            default_monster_templates(),
            classes,
            default_spawn_tables(),
        );
        assert_eq!(
            catalog.validate().unwrap_err(),
            ContentError::OversizedKit("warrior".to_string())
        );
    }

    #[test]
    fn test_validate_catches_dangling_loot_reference() {
        let mut monsters = default_monster_templates();
        monsters.templates[0].loot_table.push(LootEntry {
            item_id: "does_not_exist".to_string(),
            chance: 0.5,
            quantity: 1,
        });
        let catalog = Catalog::new(
            default_item_templates(),
            monsters,
            default_class_templates(),
            default_spawn_tables(),
        );
        assert!(catalog.validate().is_err());
    }
}
