//! Movement gating
//!
//! Movement costs energy per the destination terrain. The cost is paid
//! for the attempt: an impassable destination still consumes it, a
//! deliberate friction choice. Rejection for insufficient energy happens
//! before any mutation.

use crate::error::CommandError;
use crate::player::Player;
use crate::world::{Terrain, World};

/// What a paid movement attempt came to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player relocated to (x, y)
    Moved { x: i32, y: i32 },
    /// The destination was impassable; the cost was still paid
    Blocked { terrain: Terrain },
}

/// Attempt a single-step move. `dx`/`dy` must have exactly one non-zero
/// axis, each in {-1, 0, 1}. Insufficient energy rejects the attempt with
/// no state change; otherwise the cost is deducted unconditionally and
/// terrain blocking is evaluated afterwards.
pub fn try_move(
    world: &World,
    player: &mut Player,
    dx: i32,
    dy: i32,
) -> Result<MoveOutcome, CommandError> {
    let valid_delta = (dx == 0) != (dy == 0) && dx.abs() <= 1 && dy.abs() <= 1;
    if !valid_delta {
        return Err(CommandError::InvalidMove(dx, dy));
    }

    let (nx, ny) = (player.x + dx, player.y + dy);
    let terrain = match world.tile(nx, ny) {
        Some(tile) => tile.terrain,
        // Off the edge of the world: no destination, no cost.
        None => return Err(CommandError::InvalidMove(dx, dy)),
    };

    player.energy.spend(terrain.energy_cost())?;

    if !terrain.is_passable() {
        return Ok(MoveOutcome::Blocked { terrain });
    }

    player.x = nx;
    player.y = ny;
    Ok(MoveOutcome::Moved { x: nx, y: ny })
}
