//! Combat module
//!
//! Deterministic turn-based combat resolution and loot sampling.

pub mod loot;
pub mod resolver;

pub use loot::sample_loot;
pub use resolver::{resolve, CombatEvent, CombatOutcome, Combatant};

use serde::{Deserialize, Serialize};

/// Combat-relevant stats of a fighter. The resolver's damage formula uses
/// attack and defense; the rest feed read-time modifiers elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatantStats {
    pub attack: i32,
    pub magic_attack: i32,
    pub defense: i32,
    pub armor: i32,
    pub magic_resist: i32,
    pub evasion: i32,
    pub critical_chance: f32,
}

/// Damage per hit: attacker's attack against defender's defense, floored
/// at 1 so combat always makes forward progress.
pub fn damage(attack: i32, defense: i32) -> i32 {
    (attack - defense).max(1)
}
