//! Error taxonomy
//!
//! Content errors indicate authoring bugs and are propagated; resource and
//! inventory errors are expected control flow and always leave state
//! unchanged at the point of the attempted transition.

use thiserror::Error;

use crate::player::equipment::EquipSlot;

/// Unknown content id. Unreachable once the catalog has been validated
/// at load time, so callers treat it as fatal rather than recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("unknown item id '{0}'")]
    UnknownItem(String),
    #[error("unknown monster id '{0}'")]
    UnknownMonster(String),
    #[error("unknown class id '{0}'")]
    UnknownClass(String),
    #[error("class '{0}' starting kit exceeds inventory capacity")]
    OversizedKit(String),
}

/// Not enough of a resource pool to pay for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("not enough energy: have {current}, need {cost}")]
    Insufficient { current: i32, cost: i32 },
}

/// Inventory and equipment transition failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("inventory is full")]
    Full,
    #[error("{0} slot is already occupied")]
    SlotOccupied(EquipSlot),
    #[error("no item '{0}' in inventory")]
    NotFound(String),
    #[error("'{0}' cannot be equipped")]
    NotEquippable(String),
    #[error("'{0}' is not a consumable")]
    NotConsumable(String),
}

/// Advisory service failures. Never surfaced to the player; the caller
/// substitutes the fixed fallback decision instead.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("advisory request failed: {0}")]
    Transport(String),
    #[error("malformed advisory response: {0}")]
    Malformed(String),
}

/// Everything a game command can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error("invalid move delta ({0}, {1})")]
    InvalidMove(i32, i32),
}
