//! Egg Rally - A top-down survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collision, steering, combat, spawning, state machine)
//! - `config`: World configuration loaded from `settings.json`
//! - `controls`: Key name to action bindings
//! - `view`: Pure projection of a game state into draw commands

pub mod config;
pub mod controls;
pub mod sim;
pub mod view;

pub use config::{ConfigError, WorldConfig};
pub use controls::{Action, Controls, Direction};

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Player movement per directional key press (world units)
    pub const PLAYER_SPEED: f32 = 10.0;

    /// Hostile homing speed per tick
    pub const HOSTILE_SPEED: f32 = 1.0;
    /// Boss homing speed per tick (twice as fast as hostiles)
    pub const BOSS_SPEED: f32 = 2.0;

    /// Damage a hostile deals on contact
    pub const HOSTILE_ATTACK_DAMAGE: i32 = 1;
    /// Damage the boss deals on contact
    pub const BOSS_ATTACK_DAMAGE: i32 = 3;

    /// Damage the attack action deals to each colliding target
    pub const ATTACK_DAMAGE: i32 = 1;

    /// Spawn delay bounds, in seconds of ticks
    pub const SPAWN_DELAY_MIN_SECS: u32 = 3;
    pub const SPAWN_DELAY_MAX_SECS: u32 = 10;
}

/// Center of an axis-aligned box given its top-left corner and size
#[inline]
pub fn box_center(pos: Vec2, size: Vec2) -> Vec2 {
    pos + size / 2.0
}

/// Clamp a box's top-left corner so the box lies fully inside `[0, bounds]`
#[inline]
pub fn clamp_to_bounds(pos: Vec2, size: Vec2, bounds: Vec2) -> Vec2 {
    pos.clamp(Vec2::ZERO, (bounds - size).max(Vec2::ZERO))
}
