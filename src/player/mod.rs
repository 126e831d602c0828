//! Player module
//!
//! The character, their inventory, and their equipment.

pub mod equipment;
pub mod inventory;
pub mod player;

pub use equipment::{EquipSlot, Equipment};
pub use inventory::{Inventory, DEFAULT_CAPACITY};
pub use player::{PassiveBonuses, Player, Quest, UseEffect};
