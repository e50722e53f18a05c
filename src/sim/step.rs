//! Event-driven state machine
//!
//! `step` is the whole simulation: one prior state and one event in, one new
//! state out. Terminal states are returned unchanged.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::combat::{apply_contact_damage, strike_boss, strike_hostiles};
use super::movement::{move_player, steer_toward};
use super::spawn::{advance_spawn_timer, progress_encounter};
use super::state::{Boss, BossEncounter, GamePhase, GameState, Hostile, Player};
use crate::consts::{BOSS_SPEED, HOSTILE_SPEED};
use crate::controls::Action;

/// External events the simulation consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A key press, by platform key name
    KeyDown(String),
    /// One fixed-rate simulation step
    Tick,
}

impl GameEvent {
    pub fn key(key: impl Into<String>) -> Self {
        GameEvent::KeyDown(key.into())
    }
}

/// Advance the game by one event
pub fn step<R: Rng>(state: &GameState, event: &GameEvent, rng: &mut R) -> GameState {
    if state.is_terminal() {
        return state.clone();
    }
    match event {
        GameEvent::KeyDown(key) => match state.config.controls.action_for(key) {
            Some(action) => on_action(state, action, rng),
            None => state.clone(),
        },
        GameEvent::Tick => on_tick(state, rng),
    }
}

fn on_action<R: Rng>(state: &GameState, action: Action, rng: &mut R) -> GameState {
    let config = &state.config;

    let player = match action {
        Action::Move(direction) => move_player(&state.player, direction, config),
        Action::Attack => state.player.clone(),
    };

    let (hostiles, score, boss) = match action {
        Action::Attack => {
            let outcome = strike_hostiles(&player, &state.hostiles);
            let boss = strike_boss(&player, &state.boss);
            (outcome.hostiles, state.score + outcome.defeated, boss)
        }
        Action::Move(_) => (state.hostiles.clone(), state.score, state.boss.clone()),
    };

    let boss = progress_encounter(&boss, score, config, rng);
    let phase = if boss.is_defeated() {
        GamePhase::Won
    } else {
        state.phase
    };

    GameState {
        player,
        hostiles,
        boss,
        phase,
        score,
        ..state.clone()
    }
}

fn on_tick<R: Rng>(state: &GameState, rng: &mut R) -> GameState {
    let config = &state.config;

    let contact = apply_contact_damage(
        &state.player,
        &state.hostiles,
        &state.boss,
        state.ticks,
        state.last_hit_tick,
        config.fps,
    );
    let player = contact.player;

    let spawn = advance_spawn_timer(state.spawn_countdown, config, rng);
    let mut hostiles = state.hostiles.clone();
    hostiles.extend(spawn.spawned);

    let phase = terminal_phase(&player, &state.boss).unwrap_or(state.phase);

    // Freeze positions on the tick that ends the match
    let (hostiles, boss) = if phase.is_terminal() {
        (hostiles, state.boss.clone())
    } else {
        home_in(&player, hostiles, &state.boss)
    };

    GameState {
        player,
        hostiles,
        boss,
        phase,
        ticks: state.ticks + 1,
        last_hit_tick: contact.last_hit_tick,
        spawn_countdown: spawn.countdown,
        ..state.clone()
    }
}

/// Terminal phase implied by the player and boss, if any
fn terminal_phase(player: &Player, boss: &BossEncounter) -> Option<GamePhase> {
    if player.is_defeated() {
        Some(GamePhase::GameOver)
    } else if boss.is_defeated() {
        Some(GamePhase::Won)
    } else {
        None
    }
}

/// Move every hostile and the active boss one homing step toward the player
fn home_in(
    player: &Player,
    hostiles: Vec<Hostile>,
    boss: &BossEncounter,
) -> (Vec<Hostile>, BossEncounter) {
    let target = player.aabb();
    let hostiles = hostiles
        .into_iter()
        .map(|hostile| Hostile {
            pos: steer_toward(&hostile.aabb(), &target, HOSTILE_SPEED),
            ..hostile
        })
        .collect();
    let boss = match boss {
        BossEncounter::Active(active) => BossEncounter::Active(Boss {
            pos: steer_toward(&active.aabb(), &target, BOSS_SPEED),
            ..active.clone()
        }),
        other => other.clone(),
    };
    (hostiles, boss)
}
