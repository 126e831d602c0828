//! World module
//!
//! Grid data structures, terrain, and procedural generation.

pub mod generator;
pub mod grid;
pub mod noise;
pub mod tile;

pub use generator::generate;
pub use grid::World;
pub use noise::FeatureNoise;
pub use tile::{Terrain, Tile};
