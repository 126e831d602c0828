//! Terrain spawn tables
//!
//! Per-terrain ordered lists of (content id, chance) consulted at world
//! generation. Order matters: the generator scans a table front to back
//! and places the first entry whose roll succeeds, so earlier entries get
//! priority on ties of opportunity, not just probability.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::world::Terrain;

/// One entry of a spawn table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnEntry {
    pub content_id: String,
    /// Placement chance in [0, 1]
    pub chance: f32,
}

impl SpawnEntry {
    pub fn new(content_id: &str, chance: f32) -> Self {
        Self { content_id: content_id.to_string(), chance }
    }
}

/// Monster and item spawn tables keyed by terrain. Non-spawnable terrain
/// maps to an empty list, never an absent entry, so callers never have to
/// distinguish missing from empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnTables {
    pub monsters: HashMap<Terrain, Vec<SpawnEntry>>,
    pub items: HashMap<Terrain, Vec<SpawnEntry>>,
}

impl SpawnTables {
    /// Ordered monster spawn entries for a terrain
    pub fn monsters_for(&self, terrain: Terrain) -> &[SpawnEntry] {
        self.monsters.get(&terrain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ordered item spawn entries for a terrain
    pub fn items_for(&self, terrain: Terrain) -> &[SpawnEntry] {
        self.items.get(&terrain).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Create default spawn tables (hardcoded fallback)
pub fn default_spawn_tables() -> SpawnTables {
    let mut monsters = HashMap::new();
    monsters.insert(
        Terrain::Grass,
        vec![
            SpawnEntry::new("grey_wolf", 0.06),
            SpawnEntry::new("tusked_boar", 0.04),
        ],
    );
    monsters.insert(
        Terrain::Tree,
        vec![
            SpawnEntry::new("wood_bandit", 0.08),
            SpawnEntry::new("grey_wolf", 0.05),
        ],
    );
    monsters.insert(Terrain::River, vec![SpawnEntry::new("river_serpent", 0.10)]);
    monsters.insert(Terrain::Snow, vec![SpawnEntry::new("frost_stalker", 0.09)]);
    monsters.insert(Terrain::Camp, vec![SpawnEntry::new("camp_marauder", 0.60)]);
    monsters.insert(Terrain::Mountain, vec![]);
    monsters.insert(Terrain::Town, vec![]);

    let mut items = HashMap::new();
    items.insert(
        Terrain::Grass,
        vec![SpawnEntry::new("wildberry_ration", 0.04)],
    );
    items.insert(
        Terrain::Tree,
        vec![
            SpawnEntry::new("healing_draught", 0.03),
            SpawnEntry::new("worn_sword", 0.02),
        ],
    );
    items.insert(Terrain::River, vec![SpawnEntry::new("dowsing_charm", 0.02)]);
    items.insert(Terrain::Snow, vec![SpawnEntry::new("battle_tonic", 0.03)]);
    items.insert(
        Terrain::Camp,
        vec![
            SpawnEntry::new("scale_mail", 0.15),
            SpawnEntry::new("travelers_belt", 0.15),
            SpawnEntry::new("peakrender", 0.02),
        ],
    );
    items.insert(Terrain::Mountain, vec![]);
    items.insert(Terrain::Town, vec![]);

    SpawnTables { monsters, items }
}
