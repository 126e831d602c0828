//! Item templates
//!
//! Immutable item definitions and the default content set.

use serde::{Deserialize, Serialize};

/// Item rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Rarity::Common => (200, 200, 200),
            Rarity::Uncommon => (100, 255, 100),
            Rarity::Rare => (100, 150, 255),
            Rarity::Epic => (200, 100, 255),
            Rarity::Legendary => (255, 180, 50),
        }
    }

    /// Get rarity name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Item categories. Equipment categories map to an equipment slot;
/// consumables stack and are destroyed on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Helmet,
    Armor,
    Belt,
    Consumable,
    Utility,
    Legendary,
}

impl ItemCategory {
    /// Can this category be placed in an equipment slot?
    pub fn is_equipment(&self) -> bool {
        matches!(
            self,
            ItemCategory::Weapon | ItemCategory::Helmet | ItemCategory::Armor | ItemCategory::Belt
        )
    }

    /// Do instances of this category stack in inventory?
    pub fn is_stackable(&self) -> bool {
        matches!(self, ItemCategory::Consumable)
    }
}

/// Numeric modifiers an item contributes. All additive, applied at read
/// time when computing effective player stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemModifiers {
    pub attack: i32,
    pub magic_attack: i32,
    pub defense: i32,
    pub critical_chance: f32,
    /// One-shot HP restored when consumed
    pub hp_restore: i32,
    /// Added to the energy regeneration rate while carried or equipped
    pub energy_regen_bonus: i32,
}

/// A template for creating items from external data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    /// Unique template ID for reference
    pub id: String,
    /// Display name
    pub name: String,
    /// Display glyph
    pub icon: char,
    pub category: ItemCategory,
    pub rarity: Rarity,
    pub modifiers: ItemModifiers,
    /// Class ids allowed to use this item; empty means unrestricted
    #[serde(default)]
    pub class_restriction: Vec<String>,
    /// Optional description/lore
    pub description: Option<String>,
}

/// An item instance: a template clone stamped with a quantity. Identity
/// is the template id, shared across stacked instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub template: ItemTemplate,
    /// Stack size, always >= 1
    pub quantity: u32,
}

impl Item {
    pub fn id(&self) -> &str {
        &self.template.id
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn category(&self) -> ItemCategory {
        self.template.category
    }

    pub fn modifiers(&self) -> &ItemModifiers {
        &self.template.modifiers
    }
}

/// Collection of item templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemTemplates {
    pub templates: Vec<ItemTemplate>,
}

impl ItemTemplates {
    /// Find a template by ID
    pub fn find(&self, id: &str) -> Option<&ItemTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}

/// Create default item templates (hardcoded fallback)
pub fn default_item_templates() -> ItemTemplates {
    ItemTemplates {
        templates: vec![
            // === WEAPONS ===
            ItemTemplate {
                id: "worn_sword".to_string(),
                name: "Worn Sword".to_string(),
                icon: '/',
                category: ItemCategory::Weapon,
                rarity: Rarity::Common,
                modifiers: ItemModifiers { attack: 4, ..Default::default() },
                class_restriction: vec![],
                description: Some("A blade that has seen better decades.".to_string()),
            },
            ItemTemplate {
                id: "hunting_bow".to_string(),
                name: "Hunting Bow".to_string(),
                icon: ')',
                category: ItemCategory::Weapon,
                rarity: Rarity::Uncommon,
                modifiers: ItemModifiers { attack: 5, critical_chance: 3.0, ..Default::default() },
                class_restriction: vec!["ranger".to_string()],
                description: Some("Strung with sinew, kept dry through many winters.".to_string()),
            },
            ItemTemplate {
                id: "ash_staff".to_string(),
                name: "Ash Staff".to_string(),
                icon: '|',
                category: ItemCategory::Weapon,
                rarity: Rarity::Uncommon,
                modifiers: ItemModifiers { attack: 2, magic_attack: 6, ..Default::default() },
                class_restriction: vec!["mystic".to_string()],
                description: Some("Cut from a lightning-struck ash.".to_string()),
            },

            // === HELMETS ===
            ItemTemplate {
                id: "leather_cap".to_string(),
                name: "Leather Cap".to_string(),
                icon: '^',
                category: ItemCategory::Helmet,
                rarity: Rarity::Common,
                modifiers: ItemModifiers { defense: 2, ..Default::default() },
                class_restriction: vec![],
                description: None,
            },
            ItemTemplate {
                id: "iron_helm".to_string(),
                name: "Iron Helm".to_string(),
                icon: '^',
                category: ItemCategory::Helmet,
                rarity: Rarity::Rare,
                modifiers: ItemModifiers { defense: 4, ..Default::default() },
                class_restriction: vec!["warrior".to_string()],
                description: Some("Dented, but the dents are on the outside.".to_string()),
            },

            // === ARMOR ===
            ItemTemplate {
                id: "padded_vest".to_string(),
                name: "Padded Vest".to_string(),
                icon: '[',
                category: ItemCategory::Armor,
                rarity: Rarity::Common,
                modifiers: ItemModifiers { defense: 3, ..Default::default() },
                class_restriction: vec![],
                description: None,
            },
            ItemTemplate {
                id: "scale_mail".to_string(),
                name: "Scale Mail".to_string(),
                icon: '[',
                category: ItemCategory::Armor,
                rarity: Rarity::Rare,
                modifiers: ItemModifiers { defense: 6, ..Default::default() },
                class_restriction: vec![],
                description: Some("River-serpent scales, riveted to boiled leather.".to_string()),
            },

            // === BELTS ===
            ItemTemplate {
                id: "travelers_belt".to_string(),
                name: "Traveler's Belt".to_string(),
                icon: '=',
                category: ItemCategory::Belt,
                rarity: Rarity::Uncommon,
                modifiers: ItemModifiers { energy_regen_bonus: 2, ..Default::default() },
                class_restriction: vec![],
                description: Some("Pouches for everything a long road demands.".to_string()),
            },

            // === CONSUMABLES ===
            ItemTemplate {
                id: "healing_draught".to_string(),
                name: "Healing Draught".to_string(),
                icon: '!',
                category: ItemCategory::Consumable,
                rarity: Rarity::Common,
                modifiers: ItemModifiers { hp_restore: 25, ..Default::default() },
                class_restriction: vec![],
                description: Some("Bitter, red, effective.".to_string()),
            },
            ItemTemplate {
                id: "wildberry_ration".to_string(),
                name: "Wildberry Ration".to_string(),
                icon: '%',
                category: ItemCategory::Consumable,
                rarity: Rarity::Common,
                modifiers: ItemModifiers { hp_restore: 10, ..Default::default() },
                class_restriction: vec![],
                description: None,
            },
            ItemTemplate {
                id: "battle_tonic".to_string(),
                name: "Battle Tonic".to_string(),
                icon: '!',
                category: ItemCategory::Consumable,
                rarity: Rarity::Uncommon,
                modifiers: ItemModifiers { attack: 5, ..Default::default() },
                class_restriction: vec![],
                description: Some("Grants a short-lived surge of strength.".to_string()),
            },

            // === UTILITY ===
            ItemTemplate {
                id: "dowsing_charm".to_string(),
                name: "Dowsing Charm".to_string(),
                icon: '?',
                category: ItemCategory::Utility,
                rarity: Rarity::Uncommon,
                modifiers: ItemModifiers { energy_regen_bonus: 1, ..Default::default() },
                class_restriction: vec![],
                description: Some("Twitches toward fresh water.".to_string()),
            },

            // === LEGENDARY ===
            ItemTemplate {
                id: "peakrender".to_string(),
                name: "Peakrender".to_string(),
                icon: '†',
                category: ItemCategory::Legendary,
                rarity: Rarity::Legendary,
                modifiers: ItemModifiers {
                    attack: 12,
                    critical_chance: 8.0,
                    ..Default::default()
                },
                class_restriction: vec![],
                description: Some("The blade that split the Old Crag, or so the camps claim.".to_string()),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_equipment() {
        assert!(ItemCategory::Weapon.is_equipment());
        assert!(ItemCategory::Belt.is_equipment());
        assert!(!ItemCategory::Consumable.is_equipment());
        assert!(!ItemCategory::Legendary.is_equipment());
    }

    #[test]
    fn test_only_consumables_stack() {
        assert!(ItemCategory::Consumable.is_stackable());
        assert!(!ItemCategory::Weapon.is_stackable());
        assert!(!ItemCategory::Utility.is_stackable());
    }

    #[test]
    fn test_default_templates_have_unique_ids() {
        let templates = default_item_templates();
        for t in &templates.templates {
            let count = templates.templates.iter().filter(|o| o.id == t.id).count();
            assert_eq!(count, 1, "duplicate item id {}", t.id);
        }
    }
}
