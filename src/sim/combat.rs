//! Combat resolution: the player's attack and contact damage to the player

use super::collision::overlaps;
use super::state::{Boss, BossEncounter, Hostile, Player};
use crate::consts::ATTACK_DAMAGE;

/// Result of one attack against the hostile collection
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    /// Surviving hostiles, in their original order
    pub hostiles: Vec<Hostile>,
    /// Hostiles defeated by this attack
    pub defeated: u64,
}

/// Damage every hostile overlapping the player and drop the defeated ones
pub fn strike_hostiles(player: &Player, hostiles: &[Hostile]) -> AttackOutcome {
    let reach = player.aabb();
    let mut defeated = 0;
    let hostiles = hostiles
        .iter()
        .filter_map(|hostile| {
            if !overlaps(&reach, &hostile.aabb()) {
                return Some(hostile.clone());
            }
            let hp = hostile.hp - ATTACK_DAMAGE;
            if hp <= 0 {
                defeated += 1;
                None
            } else {
                Some(Hostile { hp, ..hostile.clone() })
            }
        })
        .collect();

    AttackOutcome { hostiles, defeated }
}

/// Damage the boss if it is active and overlapping the player
///
/// A boss at zero HP becomes `Defeated`; every other encounter is unchanged.
pub fn strike_boss(player: &Player, boss: &BossEncounter) -> BossEncounter {
    match boss {
        BossEncounter::Active(active) if overlaps(&player.aabb(), &active.aabb()) => {
            let hit = Boss {
                hp: active.hp - ATTACK_DAMAGE,
                ..active.clone()
            };
            if hit.hp <= 0 {
                BossEncounter::Defeated(hit)
            } else {
                BossEncounter::Active(hit)
            }
        }
        other => other.clone(),
    }
}

/// Result of the contact damage check for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct ContactOutcome {
    pub player: Player,
    pub last_hit_tick: Option<u64>,
    /// Damage dealt this tick (0 if none)
    pub damage: i32,
}

/// Whether the contact damage window has elapsed at `tick`
#[inline]
pub fn can_take_damage(tick: u64, last_hit_tick: Option<u64>, fps: u32) -> bool {
    match last_hit_tick {
        Some(last) => tick.saturating_sub(last) >= u64::from(fps),
        None => true,
    }
}

/// Apply at most one contact hit to the player
///
/// An overlapping active boss takes priority; otherwise the first overlapping
/// hostile in collection order deals its damage.
pub fn apply_contact_damage(
    player: &Player,
    hostiles: &[Hostile],
    boss: &BossEncounter,
    tick: u64,
    last_hit_tick: Option<u64>,
    fps: u32,
) -> ContactOutcome {
    let unchanged = ContactOutcome {
        player: player.clone(),
        last_hit_tick,
        damage: 0,
    };
    if !can_take_damage(tick, last_hit_tick, fps) {
        return unchanged;
    }

    let body = player.aabb();
    let boss_damage = boss
        .active()
        .filter(|b| overlaps(&body, &b.aabb()))
        .map(|b| b.attack_damage);
    let damage = boss_damage.or_else(|| {
        hostiles
            .iter()
            .find(|h| overlaps(&body, &h.aabb()))
            .map(|h| h.attack_damage)
    });

    match damage {
        Some(damage) => ContactOutcome {
            player: Player {
                hp: player.hp - damage,
                ..player.clone()
            },
            last_hit_tick: Some(tick),
            damage,
        },
        None => unchanged,
    }
}
