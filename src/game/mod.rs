//! Game module
//!
//! The session layer tying catalog, world, player, and combat together.

pub mod session;

pub use session::{Game, GameMessage, MessageKind};
