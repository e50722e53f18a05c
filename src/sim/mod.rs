//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One event in, one new state out
//! - Randomness only from an injected, seedable RNG
//! - Stable iteration order (hostile collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod movement;
pub mod session;
pub mod spawn;
pub mod state;
pub mod step;

pub use collision::{Aabb, overlaps};
pub use combat::{AttackOutcome, ContactOutcome, apply_contact_damage, strike_boss, strike_hostiles};
pub use movement::{move_player, steer_toward};
pub use session::Session;
pub use spawn::{advance_spawn_timer, next_spawn_delay, progress_encounter, spawn_hostile};
pub use state::{Boss, BossEncounter, GamePhase, GameState, Hostile, Player};
pub use step::{GameEvent, step};
