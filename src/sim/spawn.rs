//! Hostile spawn scheduling and the boss unlock
//!
//! All randomness comes from the caller's RNG so runs replay from a seed.

use glam::Vec2;
use rand::Rng;

use super::state::{Boss, BossEncounter, Hostile};
use crate::config::WorldConfig;
use crate::consts::{HOSTILE_ATTACK_DAMAGE, SPAWN_DELAY_MAX_SECS, SPAWN_DELAY_MIN_SECS};

/// Ticks until the next spawn: uniform in `[3 * fps, 10 * fps]`
pub fn next_spawn_delay<R: Rng>(fps: u32, rng: &mut R) -> u32 {
    rng.random_range(SPAWN_DELAY_MIN_SECS * fps..=SPAWN_DELAY_MAX_SECS * fps)
}

/// Uniform integer position that keeps a box of `size` inside the world
pub fn random_position<R: Rng>(size: Vec2, config: &WorldConfig, rng: &mut R) -> Vec2 {
    let max_x = config.world_width.saturating_sub(size.x as u32);
    let max_y = config.world_height.saturating_sub(size.y as u32);
    Vec2::new(
        rng.random_range(0..=max_x) as f32,
        rng.random_range(0..=max_y) as f32,
    )
}

/// A full-HP hostile at a random position
pub fn spawn_hostile<R: Rng>(config: &WorldConfig, rng: &mut R) -> Hostile {
    let size = config.eggnemy_size();
    Hostile {
        pos: random_position(size, config, rng),
        size,
        hp: config.eggnemy_initial_hp,
        max_hp: config.eggnemy_initial_hp,
        attack_damage: HOSTILE_ATTACK_DAMAGE,
    }
}

/// Result of advancing the spawn countdown by one tick
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnOutcome {
    pub spawned: Option<Hostile>,
    pub countdown: u32,
}

/// Count down one tick; at zero spawn a hostile and draw a new delay
pub fn advance_spawn_timer<R: Rng>(countdown: u32, config: &WorldConfig, rng: &mut R) -> SpawnOutcome {
    let countdown = countdown.saturating_sub(1);
    if countdown > 0 {
        return SpawnOutcome {
            spawned: None,
            countdown,
        };
    }

    let hostile = spawn_hostile(config, rng);
    SpawnOutcome {
        spawned: Some(hostile),
        countdown: next_spawn_delay(config.fps, rng),
    }
}

/// Unlock the boss once the kill threshold is met
///
/// Only a `Dormant` encounter can change; the unlock happens at most once.
pub fn progress_encounter<R: Rng>(
    boss: &BossEncounter,
    score: u64,
    config: &WorldConfig,
    rng: &mut R,
) -> BossEncounter {
    match boss {
        BossEncounter::Dormant if score >= config.eggnemies_to_defeat_for_boss => {
            let pos = random_position(config.boss_size(), config, rng);
            BossEncounter::Active(Boss::new(pos, config))
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn config() -> WorldConfig {
        WorldConfig {
            fps: 60,
            world_width: 200,
            world_height: 200,
            eggnemy_width: 20,
            eggnemy_height: 20,
            eggnemy_initial_hp: 1,
            eggnemies_to_defeat_for_boss: 3,
            boss_width: 20,
            boss_height: 20,
            boss_initial_hp: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_within_bounds() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..500 {
            let hostile = spawn_hostile(&config, &mut rng);
            assert!(hostile.aabb().is_within(config.world_size()));
            assert_eq!(hostile.hp, config.eggnemy_initial_hp);
            assert_eq!(hostile.max_hp, config.eggnemy_initial_hp);
            assert_eq!(hostile.attack_damage, HOSTILE_ATTACK_DAMAGE);
        }
    }

    #[test]
    fn test_spawn_delay_range() {
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..500 {
            let delay = next_spawn_delay(60, &mut rng);
            assert!((180..=600).contains(&delay));
        }
    }

    #[test]
    fn test_timer_counts_down_without_spawning() {
        let mut rng = Pcg32::seed_from_u64(3);
        let outcome = advance_spawn_timer(10, &config(), &mut rng);
        assert_eq!(outcome.countdown, 9);
        assert!(outcome.spawned.is_none());
    }

    #[test]
    fn test_timer_spawns_at_zero_and_resets() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(4);
        for countdown in [0, 1] {
            let outcome = advance_spawn_timer(countdown, &config, &mut rng);
            let hostile = outcome.spawned.expect("spawn at zero");
            assert!(hostile.aabb().is_within(config.world_size()));
            assert!((180..=600).contains(&outcome.countdown));
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let config = config();
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(spawn_hostile(&config, &mut a), spawn_hostile(&config, &mut b));
        }
    }

    #[test]
    fn test_boss_unlocks_at_threshold() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(5);

        let below = progress_encounter(&BossEncounter::Dormant, 2, &config, &mut rng);
        assert_eq!(below, BossEncounter::Dormant);

        let unlocked = progress_encounter(&BossEncounter::Dormant, 3, &config, &mut rng);
        let boss = unlocked.active().expect("boss active");
        assert_eq!(boss.hp, config.boss_initial_hp);
        assert_eq!(boss.max_hp, config.boss_initial_hp);
        assert!(boss.aabb().is_within(config.world_size()));
        assert!(unlocked.has_spawned());
    }

    #[test]
    fn test_boss_unlocks_only_once() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(6);
        let unlocked = progress_encounter(&BossEncounter::Dormant, 3, &config, &mut rng);

        // Further score increases leave the existing boss untouched
        for score in 4..20 {
            assert_eq!(progress_encounter(&unlocked, score, &config, &mut rng), unlocked);
        }

        let boss = unlocked.active().cloned().expect("boss active");
        let defeated = BossEncounter::Defeated(boss);
        assert_eq!(progress_encounter(&defeated, 100, &config, &mut rng), defeated);
        assert_eq!(
            progress_encounter(&BossEncounter::NoBoss, 100, &config, &mut rng),
            BossEncounter::NoBoss
        );
    }
}
