//! Player movement and homing steering

use glam::Vec2;

use super::collision::Aabb;
use super::state::Player;
use crate::clamp_to_bounds;
use crate::config::WorldConfig;
use crate::consts::PLAYER_SPEED;
use crate::controls::Direction;

/// Unit step along one axis for a direction (screen space, +y is down)
#[inline]
pub fn direction_delta(direction: Direction) -> Vec2 {
    match direction {
        Direction::Up => Vec2::NEG_Y,
        Direction::Down => Vec2::Y,
        Direction::Left => Vec2::NEG_X,
        Direction::Right => Vec2::X,
    }
}

/// Move the player one step, clamped so its box stays inside the world
pub fn move_player(player: &Player, direction: Direction, config: &WorldConfig) -> Player {
    let pos = player.pos + direction_delta(direction) * PLAYER_SPEED;
    Player {
        pos: clamp_to_bounds(pos, player.size, config.world_size()),
        ..player.clone()
    }
}

/// New top-left position of `mover` after one homing step toward `target`
///
/// Moves `speed` units along the line between box centers. Coincident
/// centers leave the mover in place.
pub fn steer_toward(mover: &Aabb, target: &Aabb, speed: f32) -> Vec2 {
    let diff = target.center() - mover.center();
    let distance = diff.length();
    let distance = if distance == 0.0 { 1.0 } else { distance };
    mover.pos + diff / distance * speed
}
