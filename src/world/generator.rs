//! Procedural world generation
//!
//! Terrain from feature noise evaluated in fixed priority order, then
//! ordered spawn-table passes for monsters and items, then the settlement
//! force-placed at the center.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, SpawnEntry};
use crate::error::ContentError;

use super::grid::World;
use super::noise::FeatureNoise;
use super::tile::Terrain;

// Feature priority is fixed: mountain > snow > river > camp > tree >
// grass. Features are evaluated independently and can overlap; the first
// whose threshold is exceeded wins. Mountain must stay highest because it
// is impassable and must not be overridden by decorative terrain.
const MOUNTAIN: FeatureNoise = FeatureNoise::new(0.34, 0x01, 0.55);
const SNOW: FeatureNoise = FeatureNoise::new(0.17, 0x02, 0.60);
const RIVER: FeatureNoise = FeatureNoise::new(0.23, 0x03, 0.58);
const CAMP: FeatureNoise = FeatureNoise::new(0.91, 0x04, 0.88);
const TREE: FeatureNoise = FeatureNoise::new(0.47, 0x05, 0.35);

const FEATURES: [(FeatureNoise, Terrain); 5] = [
    (MOUNTAIN, Terrain::Mountain),
    (SNOW, Terrain::Snow),
    (RIVER, Terrain::River),
    (CAMP, Terrain::Camp),
    (TREE, Terrain::Tree),
];

/// Generate a world. Total for any valid (size, seed) given a validated
/// catalog; a spawn table referencing an unknown id propagates the
/// catalog's error.
pub fn generate(catalog: &Catalog, size: i32, seed: u64) -> Result<World, ContentError> {
    let mut world = World::new(size, seed);

    for y in 0..size {
        for x in 0..size {
            world.set_terrain(x, y, assign_terrain(x, y, seed));
        }
    }

    // Spawn draws come from one seeded rng iterated in row-major order,
    // so identical (size, seed) reproduce identical occupancy.
    let mut rng = StdRng::seed_from_u64(seed);
    for y in 0..size {
        for x in 0..size {
            let terrain = world
                .tile(x, y)
                .map(|t| t.terrain)
                .unwrap_or(Terrain::Grass);

            // Monster pass, then an independent item pass.
            let monster_id = roll_table(catalog.monster_spawns(terrain), &mut rng);
            let item_id = roll_table(catalog.item_spawns(terrain), &mut rng);

            if let Some(id) = monster_id {
                let monster = catalog.spawn_monster(&id, x, y)?;
                if let Some(tile) = world.tile_mut(x, y) {
                    tile.monster = Some(monster);
                }
            }
            if let Some(id) = item_id {
                let item = catalog.instantiate_item(&id, 1)?;
                if let Some(tile) = world.tile_mut(x, y) {
                    tile.item = Some(item);
                }
            }
        }
    }

    place_settlement(&mut world);
    log::debug!("generated {size}x{size} world from seed {seed}");
    Ok(world)
}

/// First feature past its threshold wins, in priority order
fn assign_terrain(x: i32, y: i32, seed: u64) -> Terrain {
    for (feature, terrain) in FEATURES {
        if feature.exceeds(x, y, seed) {
            return terrain;
        }
    }
    Terrain::Grass
}

/// Scan a spawn table front to back, one uniform draw per entry, and
/// return the first entry whose draw falls under its chance. Scanning
/// stops at the first match; later entries are not considered.
fn roll_table(table: &[SpawnEntry], rng: &mut impl Rng) -> Option<String> {
    for entry in table {
        if rng.gen::<f32>() < entry.chance {
            return Some(entry.content_id.clone());
        }
    }
    None
}

/// Force-place the town at the grid center and clear occupancy from the 8
/// neighboring cells (their terrain is left as generated), guaranteeing a
/// safe starting area.
fn place_settlement(world: &mut World) {
    let (cx, cy) = world.center();
    world.set_terrain(cx, cy, Terrain::Town);
    world.clear_occupants(cx, cy);
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            world.clear_occupants(cx + dx, cy + dy);
        }
    }
}
