//! Seeded match driver
//!
//! Owns the current state and the RNG so a match replays exactly from its seed.

use std::sync::Arc;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GamePhase, GameState};
use super::step::{GameEvent, step};
use crate::config::WorldConfig;

/// A single match in progress
#[derive(Debug, Clone)]
pub struct Session {
    seed: u64,
    rng: Pcg32,
    state: GameState,
}

impl Session {
    /// Start a new match from a seed
    pub fn new(config: WorldConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(Arc::new(config), &mut rng);
        log::info!(
            "Match started (seed {}, {} initial eggnemies, next spawn in {} ticks)",
            seed,
            state.hostiles.len(),
            state.spawn_countdown
        );
        Self { seed, rng, state }
    }

    /// Resume from an existing state with a fresh seeded RNG
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            state,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one event and return the new state
    pub fn handle(&mut self, event: &GameEvent) -> &GameState {
        let next = step(&self.state, event, &mut self.rng);
        log_transition(&self.state, &next);
        self.state = next;
        &self.state
    }

    /// Apply a sequence of events in order
    pub fn handle_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) -> &GameState {
        for event in events {
            self.handle(event);
        }
        &self.state
    }
}

fn log_transition(prev: &GameState, next: &GameState) {
    if next.hostiles.len() > prev.hostiles.len() {
        log::debug!(
            "Eggnemy spawned at tick {} ({} on field, next in {} ticks)",
            prev.ticks,
            next.hostiles.len(),
            next.spawn_countdown
        );
    }
    if next.player.hp < prev.player.hp {
        log::debug!(
            "Egg hit for {} at tick {} (hp {}/{})",
            prev.player.hp - next.player.hp,
            prev.ticks,
            next.player.hp.max(0),
            next.player.max_hp
        );
    }
    if next.score > prev.score {
        log::debug!("Defeated {} eggnemies (score {})", next.score - prev.score, next.score);
    }
    if !prev.boss.has_spawned() && next.boss.has_spawned() {
        log::info!("Boss unlocked at score {}", next.score);
    }
    if prev.phase != next.phase {
        match next.phase {
            GamePhase::GameOver => log::info!("Game over at tick {} (score {})", next.ticks, next.score),
            GamePhase::Won => log::info!("Boss defeated at tick {} (score {})", next.ticks, next.score),
            GamePhase::Playing => {}
        }
    }
}
