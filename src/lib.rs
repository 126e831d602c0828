//! Wildlands - a tile-world adventure simulation core
//!
//! Procedural overworld synthesis from terrain noise, terrain-weighted
//! monster and item spawning, deterministic turn-based combat, and the
//! resource economy that gates exploration.

pub mod advisor;
pub mod catalog;
pub mod combat;
pub mod error;
pub mod game;
pub mod player;
pub mod progression;
pub mod world;

// Re-export commonly used types
pub use catalog::Catalog;
pub use game::{Game, GameMessage, MessageKind};
pub use player::Player;
pub use world::{Terrain, Tile, World};
