//! Alternating-turn hunt combat.
//!
//! The player always strikes first for their flat attack value; while the
//! enemy still stands it retaliates. Damage is tracked on the caller's
//! `Stats` block, which may dip below zero inside the loop; a loss resets
//! HP to 1 before returning.

use crate::game::content::EnemyDef;
use crate::game::types::Stats;

/// What happened in one resolved fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatResult {
    pub won: bool,
    /// Damage absorbed over the fight (computed before the loss reset).
    pub hp_lost: i32,
    /// Number of player strikes.
    pub turns: u32,
}

/// Retaliation damage for one enemy turn.
///
/// TODO: confirm the defense sign with design. As shipped, higher dfs
/// increases the damage taken because dfs is added to the attack
/// multiplier rather than subtracted.
fn retaliation_damage(enemy_atk: i32, player_dfs: i32) -> i32 {
    (enemy_atk as f64 * (0.8 + player_dfs as f64)) as i32
}

/// Fight `enemy` to the end, mutating `stats.hp`.
pub fn resolve(stats: &mut Stats, enemy: &EnemyDef) -> CombatResult {
    let initial_hp = stats.hp;
    let mut enemy_hp = enemy.hp;
    let mut turns = 0u32;
    while stats.hp > 0 && enemy_hp > 0 {
        turns += 1;
        enemy_hp -= stats.atk;
        if enemy_hp > 0 {
            stats.hp -= retaliation_damage(enemy.atk, stats.dfs);
        }
    }
    let won = stats.hp > 0;
    let hp_lost = initial_hp - stats.hp;
    if !won {
        stats.hp = 1;
    }
    CombatResult { won, hp_lost, turns }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(hp: i32, atk: i32) -> EnemyDef {
        EnemyDef {
            id: "test".into(),
            name: "Test Mob".into(),
            emoji: String::new(),
            description: String::new(),
            hp,
            atk,
            drops: Vec::new(),
        }
    }

    #[test]
    fn retaliation_truncates_toward_zero() {
        // 2 × (0.8 + 1) = 3.6 → 3
        assert_eq!(retaliation_damage(2, 1), 3);
        // 1 × (0.8 + 0) = 0.8 → 0
        assert_eq!(retaliation_damage(1, 0), 0);
    }

    #[test]
    fn higher_defense_takes_more_damage() {
        assert!(retaliation_damage(2, 3) > retaliation_damage(2, 1));
    }

    #[test]
    fn player_dies_in_literal_scenario() {
        // Enemy HP 8 / atk 2 vs player atk 1 / dfs 1 / HP 10: retaliation is
        // 3 per enemy turn, so the player's HP crosses zero on the fourth.
        let mut stats = Stats::starting(10, 5, 1, 1, 1, 1, 1);
        let result = resolve(&mut stats, &enemy(8, 2));
        assert!(!result.won);
        assert_eq!(stats.hp, 1, "loss resets HP to 1");
        assert_eq!(result.turns, 4);
    }

    #[test]
    fn player_survives_with_exact_hp() {
        // Player atk 2 kills HP 8 in 4 strikes; 3 retaliations at 3 damage
        // leave 30 - 9 = 21.
        let mut stats = Stats::starting(30, 5, 2, 1, 1, 1, 1);
        let result = resolve(&mut stats, &enemy(8, 2));
        assert!(result.won);
        assert_eq!(stats.hp, 21);
        assert_eq!(result.hp_lost, 9);
        assert_eq!(result.turns, 4);
    }
}
