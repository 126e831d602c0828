//! World grid
//!
//! The fixed-size square matrix of tiles for one session. Terrain is
//! immutable after generation; occupancy is cleared on pickup/defeat.

use serde::{Deserialize, Serialize};

use super::tile::{Terrain, Tile};

/// A generated overworld
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    size: i32,
    seed: u64,
    tiles: Vec<Tile>,
}

impl World {
    /// Create a world of `size` x `size` grass tiles
    pub fn new(size: i32, seed: u64) -> Self {
        assert!(size > 0, "world size must be positive");
        Self {
            size,
            seed,
            tiles: vec![Tile::default(); (size * size) as usize],
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Center coordinates, where the settlement is placed
    pub fn center(&self) -> (i32, i32) {
        (self.size / 2, self.size / 2)
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.size + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size
    }

    /// Get tile at position
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Get mutable tile at position
    pub fn tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            Some(&mut self.tiles[idx])
        } else {
            None
        }
    }

    /// Set terrain at position (generation only)
    pub(crate) fn set_terrain(&mut self, x: i32, y: i32, terrain: Terrain) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.tiles[idx].terrain = terrain;
        }
    }

    /// Clear monster and item occupancy at position
    pub fn clear_occupants(&mut self, x: i32, y: i32) {
        if let Some(tile) = self.tile_mut(x, y) {
            tile.clear_occupants();
        }
    }

    /// Check if a position can be entered
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).map_or(false, |t| t.terrain.is_passable())
    }
}
