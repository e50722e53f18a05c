//! Game state and core simulation types
//!
//! A `GameState` is an immutable snapshot: every step reads one and builds the next.

use std::sync::Arc;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawn::{next_spawn_delay, spawn_hostile};
use crate::config::WorldConfig;
use crate::consts::BOSS_ATTACK_DAMAGE;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player HP reached zero
    GameOver,
    /// Boss defeated
    Won,
}

impl GamePhase {
    /// Terminal phases absorb every further event
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// The player-controlled egg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// May be stored below zero; display floors it
    pub hp: i32,
    pub max_hp: i32,
}

impl Player {
    /// Player at the center of the world with full HP
    pub fn centered(config: &WorldConfig) -> Self {
        let size = config.egg_size();
        Self {
            pos: (config.world_size() - size) / 2.0,
            size,
            hp: config.egg_initial_hp,
            max_hp: config.egg_initial_hp,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

/// A hostile ("eggnemy")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hostile {
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    pub attack_damage: i32,
}

impl Hostile {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// The boss entity while it exists on the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    pub attack_damage: i32,
}

impl Boss {
    /// Full-HP boss at `pos`
    pub fn new(pos: Vec2, config: &WorldConfig) -> Self {
        Self {
            pos,
            size: config.boss_size(),
            hp: config.boss_initial_hp,
            max_hp: config.boss_initial_hp,
            attack_damage: BOSS_ATTACK_DAMAGE,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Progress of the one-time boss encounter
///
/// Transitions only move forward: `Dormant -> Active -> Defeated`.
/// `NoBoss` never transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BossEncounter {
    /// Match configured without a boss
    NoBoss,
    /// Waiting for the kill threshold
    Dormant,
    /// On the field and fightable
    Active(Boss),
    /// HP reached zero; kept for its final position
    Defeated(Boss),
}

impl BossEncounter {
    /// Starting encounter for a config
    pub fn for_config(config: &WorldConfig) -> Self {
        if config.has_boss() {
            BossEncounter::Dormant
        } else {
            BossEncounter::NoBoss
        }
    }

    /// Boss has ever been created
    pub fn has_spawned(&self) -> bool {
        matches!(self, BossEncounter::Active(_) | BossEncounter::Defeated(_))
    }

    /// Boss currently present and fightable
    pub fn is_active(&self) -> bool {
        matches!(self, BossEncounter::Active(_))
    }

    pub fn is_defeated(&self) -> bool {
        matches!(self, BossEncounter::Defeated(_))
    }

    /// The active boss, if any
    pub fn active(&self) -> Option<&Boss> {
        match self {
            BossEncounter::Active(boss) => Some(boss),
            _ => None,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: Arc<WorldConfig>,
    pub player: Player,
    /// Collection order is the combat/contact tie-break order
    pub hostiles: Vec<Hostile>,
    pub boss: BossEncounter,
    pub phase: GamePhase,
    /// Defeated hostile count
    pub score: u64,
    /// Simulation tick counter
    pub ticks: u64,
    /// Tick of the last contact damage taken (`None` = never hit)
    pub last_hit_tick: Option<u64>,
    /// Ticks remaining until the next hostile spawn
    pub spawn_countdown: u32,
}

impl GameState {
    /// Fresh match: centered egg, initial hostiles, first spawn countdown
    pub fn new<R: Rng>(config: Arc<WorldConfig>, rng: &mut R) -> Self {
        let hostiles = (0..config.initial_number_of_eggnemies)
            .map(|_| spawn_hostile(&config, rng))
            .collect();
        let spawn_countdown = next_spawn_delay(config.fps, rng);

        Self {
            player: Player::centered(&config),
            hostiles,
            boss: BossEncounter::for_config(&config),
            phase: GamePhase::Playing,
            score: 0,
            ticks: 0,
            last_hit_tick: None,
            spawn_countdown,
            config,
        }
    }

    /// Match with an explicit player and hostile set, used by scripted scenarios
    pub fn with_entities(
        config: Arc<WorldConfig>,
        player: Player,
        hostiles: Vec<Hostile>,
        spawn_countdown: u32,
    ) -> Self {
        Self {
            player,
            hostiles,
            boss: BossEncounter::for_config(&config),
            phase: GamePhase::Playing,
            score: 0,
            ticks: 0,
            last_hit_tick: None,
            spawn_countdown,
            config,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Elapsed match time in whole seconds
    pub fn elapsed_secs(&self) -> u64 {
        self.ticks / u64::from(self.config.fps.max(1))
    }
}
