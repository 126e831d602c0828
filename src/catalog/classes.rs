//! Character class templates
//!
//! Base stats and starting kit used at character creation.

use serde::{Deserialize, Serialize};

use crate::combat::CombatantStats;

/// A template for creating player characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTemplate {
    /// Unique template ID for reference
    pub id: String,
    /// Display name
    pub name: String,
    /// Display glyph
    pub icon: char,
    /// Default race for this class
    pub race: String,
    pub stats: CombatantStats,
    pub max_hp: i32,
    pub max_energy: i32,
    /// (item id, quantity) pairs added to inventory at creation
    #[serde(default)]
    pub starting_items: Vec<(String, u32)>,
}

/// Collection of class templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassTemplates {
    pub templates: Vec<ClassTemplate>,
}

impl ClassTemplates {
    /// Find a template by ID
    pub fn find(&self, id: &str) -> Option<&ClassTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}

/// Create default class templates (hardcoded fallback)
pub fn default_class_templates() -> ClassTemplates {
    ClassTemplates {
        templates: vec![
            ClassTemplate {
                id: "warrior".to_string(),
                name: "Warrior".to_string(),
                icon: '@',
                race: "Human".to_string(),
                stats: CombatantStats {
                    attack: 12,
                    magic_attack: 2,
                    defense: 8,
                    armor: 6,
                    magic_resist: 3,
                    evasion: 4,
                    critical_chance: 5.0,
                },
                max_hp: 120,
                max_energy: 100,
                starting_items: vec![
                    ("worn_sword".to_string(), 1),
                    ("healing_draught".to_string(), 2),
                ],
            },
            ClassTemplate {
                id: "ranger".to_string(),
                name: "Ranger".to_string(),
                icon: '@',
                race: "Elf".to_string(),
                stats: CombatantStats {
                    attack: 10,
                    magic_attack: 4,
                    defense: 6,
                    armor: 4,
                    magic_resist: 4,
                    evasion: 8,
                    critical_chance: 8.0,
                },
                max_hp: 100,
                max_energy: 120,
                starting_items: vec![
                    ("hunting_bow".to_string(), 1),
                    ("wildberry_ration".to_string(), 3),
                ],
            },
            ClassTemplate {
                id: "mystic".to_string(),
                name: "Mystic".to_string(),
                icon: '@',
                race: "Human".to_string(),
                stats: CombatantStats {
                    attack: 6,
                    magic_attack: 12,
                    defense: 5,
                    armor: 3,
                    magic_resist: 8,
                    evasion: 5,
                    critical_chance: 6.0,
                },
                max_hp: 90,
                max_energy: 110,
                starting_items: vec![
                    ("ash_staff".to_string(), 1),
                    ("healing_draught".to_string(), 1),
                    ("dowsing_charm".to_string(), 1),
                ],
            },
        ],
    }
}
