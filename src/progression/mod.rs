//! Progression module
//!
//! Resource pools, regeneration ticking, timed effects, and movement
//! gating.

pub mod effects;
pub mod movement;
pub mod resources;
pub mod ticker;

pub use effects::{ActiveEffect, ActiveEffects};
pub use movement::{try_move, MoveOutcome};
pub use resources::Resource;
pub use ticker::Ticker;

/// Energy regained per regeneration tick before item bonuses
pub const BASE_ENERGY_REGEN: i32 = 5;
