//! Timed stat effects
//!
//! Buffs from consumables, counted down by regeneration ticks.

use serde::{Deserialize, Serialize};

/// One active timed effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Source item name, for messages
    pub name: String,
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    pub remaining_ticks: u32,
}

/// The set of effects currently on the player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffects {
    effects: Vec<ActiveEffect>,
}

impl ActiveEffects {
    pub fn add(&mut self, effect: ActiveEffect) {
        self.effects.push(effect);
    }

    /// Count one tick down on every effect, dropping the expired ones
    pub fn tick(&mut self) {
        for effect in &mut self.effects {
            effect.remaining_ticks = effect.remaining_ticks.saturating_sub(1);
        }
        self.effects.retain(|e| e.remaining_ticks > 0);
    }

    pub fn attack_bonus(&self) -> i32 {
        self.effects.iter().map(|e| e.attack_bonus).sum()
    }

    pub fn defense_bonus(&self) -> i32 {
        self.effects.iter().map(|e| e.defense_bonus).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }
}
