//! Monster templates
//!
//! Definitions for the creatures of the wilds and the default content set.

use serde::{Deserialize, Serialize};

/// One entry of a monster's loot table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    pub item_id: String,
    /// Drop chance in [0, 1]
    pub chance: f32,
    pub quantity: u32,
}

/// A template for creating monsters from external data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    /// Unique template ID for reference
    pub id: String,
    /// Display name
    pub name: String,
    /// Display glyph
    pub icon: char,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    /// Loot sampled on defeat: one uniformly-chosen entry, one chance roll
    #[serde(default)]
    pub loot_table: Vec<LootEntry>,
    /// Disposition scalar (0-100), consumed only by the steal advisor
    pub greed: f32,
    /// Disposition scalar, consumed only by the steal advisor
    pub power: f32,
    /// Optional description/lore
    pub description: Option<String>,
}

/// A monster placed on a tile. `current_hp` is owned by the combat
/// resolver for the duration of one encounter and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub template: MonsterTemplate,
    /// Stable per-tile id, derived from template id and coordinates
    pub instance_id: String,
    pub current_hp: i32,
}

impl Monster {
    pub fn id(&self) -> &str {
        &self.template.id
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn attack(&self) -> i32 {
        self.template.attack
    }

    pub fn defense(&self) -> i32 {
        self.template.defense
    }
}

/// Collection of monster templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonsterTemplates {
    pub templates: Vec<MonsterTemplate>,
}

impl MonsterTemplates {
    /// Find a template by ID
    pub fn find(&self, id: &str) -> Option<&MonsterTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}

/// Create default monster templates (hardcoded fallback)
pub fn default_monster_templates() -> MonsterTemplates {
    MonsterTemplates {
        templates: vec![
            MonsterTemplate {
                id: "grey_wolf".to_string(),
                name: "Grey Wolf".to_string(),
                icon: 'w',
                max_hp: 18,
                attack: 7,
                defense: 1,
                loot_table: vec![
                    LootEntry { item_id: "wildberry_ration".to_string(), chance: 0.4, quantity: 1 },
                    LootEntry { item_id: "leather_cap".to_string(), chance: 0.15, quantity: 1 },
                ],
                greed: 10.0,
                power: 15.0,
                description: Some("Lean and patient. It has been following you for a while.".to_string()),
            },
            MonsterTemplate {
                id: "tusked_boar".to_string(),
                name: "Tusked Boar".to_string(),
                icon: 'b',
                max_hp: 26,
                attack: 9,
                defense: 3,
                loot_table: vec![
                    LootEntry { item_id: "wildberry_ration".to_string(), chance: 0.5, quantity: 2 },
                ],
                greed: 5.0,
                power: 25.0,
                description: Some("Territorial, and this is its territory.".to_string()),
            },
            MonsterTemplate {
                id: "wood_bandit".to_string(),
                name: "Wood Bandit".to_string(),
                icon: 'n',
                max_hp: 22,
                attack: 8,
                defense: 2,
                loot_table: vec![
                    LootEntry { item_id: "worn_sword".to_string(), chance: 0.3, quantity: 1 },
                    LootEntry { item_id: "healing_draught".to_string(), chance: 0.35, quantity: 1 },
                    LootEntry { item_id: "travelers_belt".to_string(), chance: 0.1, quantity: 1 },
                ],
                greed: 80.0,
                power: 20.0,
                description: Some("Fallen on hard times, and happy to share them.".to_string()),
            },
            MonsterTemplate {
                id: "river_serpent".to_string(),
                name: "River Serpent".to_string(),
                icon: 's',
                max_hp: 30,
                attack: 11,
                defense: 4,
                loot_table: vec![
                    LootEntry { item_id: "scale_mail".to_string(), chance: 0.2, quantity: 1 },
                    LootEntry { item_id: "healing_draught".to_string(), chance: 0.3, quantity: 1 },
                ],
                greed: 20.0,
                power: 45.0,
                description: Some("The current moves wrong where it waits.".to_string()),
            },
            MonsterTemplate {
                id: "frost_stalker".to_string(),
                name: "Frost Stalker".to_string(),
                icon: 'f',
                max_hp: 34,
                attack: 12,
                defense: 5,
                loot_table: vec![
                    LootEntry { item_id: "iron_helm".to_string(), chance: 0.25, quantity: 1 },
                    LootEntry { item_id: "battle_tonic".to_string(), chance: 0.3, quantity: 1 },
                ],
                greed: 15.0,
                power: 60.0,
                description: Some("White on white; you see the breath before the beast.".to_string()),
            },
            MonsterTemplate {
                id: "camp_marauder".to_string(),
                name: "Camp Marauder".to_string(),
                icon: 'M',
                max_hp: 40,
                attack: 13,
                defense: 6,
                loot_table: vec![
                    LootEntry { item_id: "hunting_bow".to_string(), chance: 0.25, quantity: 1 },
                    LootEntry { item_id: "dowsing_charm".to_string(), chance: 0.2, quantity: 1 },
                    LootEntry { item_id: "peakrender".to_string(), chance: 0.05, quantity: 1 },
                ],
                greed: 90.0,
                power: 70.0,
                description: Some("Runs the rare camps you stumble on. Not a host.".to_string()),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let templates = default_monster_templates();
        assert!(templates.find("grey_wolf").is_some());
        assert!(templates.find("gilded_drake").is_none());
    }

    #[test]
    fn test_loot_chances_are_probabilities() {
        for t in &default_monster_templates().templates {
            for entry in &t.loot_table {
                assert!((0.0..=1.0).contains(&entry.chance), "{} has bad chance", t.id);
                assert!(entry.quantity >= 1);
            }
        }
    }
}
