//! Leveling function invariants across a sweep of XP deltas.

use planephobia::game::leveling::{apply_xp, required_xp};
use planephobia::game::types::Stats;

fn fresh() -> Stats {
    Stats::starting(10, 5, 2, 1, 2, 2, 2)
}

#[test]
fn non_negative_deltas_keep_current_below_required() {
    for delta in 0..=5_000i64 {
        let mut stats = fresh();
        apply_xp(&mut stats, delta);
        assert!(
            stats.currentxp < stats.requiredxp,
            "delta {} left currentxp {} >= requiredxp {}",
            delta,
            stats.currentxp,
            stats.requiredxp
        );
        assert_eq!(
            stats.requiredxp,
            required_xp(stats.level),
            "delta {} broke the curve at level {}",
            delta,
            stats.level
        );
        assert!(stats.currentxp >= 0);
    }
}

#[test]
fn deltas_accumulate_like_one_big_delta() {
    let mut split = fresh();
    for _ in 0..40 {
        apply_xp(&mut split, 37);
    }
    let mut lump = fresh();
    apply_xp(&mut lump, 37 * 40);
    assert_eq!(split.level, lump.level);
    assert_eq!(split.currentxp, lump.currentxp);
}

#[test]
fn negative_deltas_never_delevel() {
    for delta in 1..=500i64 {
        let mut stats = fresh();
        apply_xp(&mut stats, 705); // level 4 with 5 XP banked
        let level_before = stats.level;
        assert_eq!(apply_xp(&mut stats, -delta), 0);
        assert_eq!(stats.level, level_before);
        assert!(stats.currentxp >= 0);
        assert_eq!(stats.requiredxp, required_xp(stats.level));
    }
}

#[test]
fn level_up_count_matches_curve_consumption() {
    let mut stats = fresh();
    // 50 + 200 = 250 clears exactly two levels
    assert_eq!(apply_xp(&mut stats, 250), 2);
    assert_eq!(stats.level, 3);
    assert_eq!(stats.currentxp, 0);
    assert_eq!(stats.requiredxp, 450);
}
