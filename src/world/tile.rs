//! Tile definitions
//!
//! Terrain types and the per-cell occupancy model.

use serde::{Deserialize, Serialize};

use crate::catalog::{Item, Monster};

/// Terrain of one world cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Grass,
    Tree,
    River,
    Mountain,
    Snow,
    Camp,
    /// The settlement force-placed at the world center
    Town,
}

impl Terrain {
    pub const ALL: [Terrain; 7] = [
        Terrain::Grass,
        Terrain::Tree,
        Terrain::River,
        Terrain::Mountain,
        Terrain::Snow,
        Terrain::Camp,
        Terrain::Town,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Grass => "grassland",
            Terrain::Tree => "forest",
            Terrain::River => "river",
            Terrain::Mountain => "mountain",
            Terrain::Snow => "snowfield",
            Terrain::Camp => "camp",
            Terrain::Town => "town",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Terrain::Grass => '.',
            Terrain::Tree => '♣',
            Terrain::River => '≈',
            Terrain::Mountain => '^',
            Terrain::Snow => '*',
            Terrain::Camp => '○',
            Terrain::Town => '⌂',
        }
    }

    /// Energy cost of attempting to move onto this terrain. Paid for the
    /// attempt, not for successful relocation.
    pub fn energy_cost(&self) -> i32 {
        match self {
            Terrain::Grass => 5,
            Terrain::Tree => 10,
            Terrain::River => 20,
            Terrain::Mountain => 30,
            Terrain::Snow => 15,
            Terrain::Camp => 5,
            Terrain::Town => 2,
        }
    }

    /// Mountains cannot be entered; everything else can.
    pub fn is_passable(&self) -> bool {
        !matches!(self, Terrain::Mountain)
    }
}

/// A single world cell: terrain plus at most one monster and at most one
/// item. Occupancy is cleared once consumed or defeated and never
/// regenerates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: Terrain,
    pub monster: Option<Monster>,
    pub item: Option<Item>,
}

impl Tile {
    pub fn new(terrain: Terrain) -> Self {
        Self { terrain, monster: None, item: None }
    }

    /// Remove and return the monster, leaving the slot empty
    pub fn take_monster(&mut self) -> Option<Monster> {
        self.monster.take()
    }

    /// Remove and return the item, leaving the slot empty
    pub fn take_item(&mut self) -> Option<Item> {
        self.item.take()
    }

    /// Clear both occupancy slots
    pub fn clear_occupants(&mut self) {
        self.monster = None;
        self.item = None;
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(Terrain::Grass)
    }
}
