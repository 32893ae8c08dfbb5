//! Random outcome selection.
//!
//! Three flavors of chance drive the game:
//! - [`WeightedTable`]: pick one of N outcomes with probability proportional
//!   to its weight (worship dance results)
//! - [`CumulativeTable`]: pick against ascending cumulative bounds with an
//!   implicit empty band at the top (monster spawns, loot drops)
//! - [`xp_award`]: a Normal draw with level-scaled mean and deviation,
//!   truncated to an integer
//!
//! Tables are plain data passed in by the caller, and every function takes
//! the RNG as a parameter so tests can run seeded.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::Normal;

use crate::game::errors::GameError;

/// Outcomes with parallel non-negative weights. Weights need not sum to any
/// particular total.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T> WeightedTable<T> {
    /// Build a table from `(outcome, weight)` pairs. At least one weight
    /// must be positive.
    pub fn new(pairs: Vec<(T, u32)>) -> Result<Self, GameError> {
        let index = WeightedIndex::new(pairs.iter().map(|(_, w)| *w))
            .map_err(|e| GameError::InvalidContent(format!("weighted table: {e}")))?;
        Ok(Self {
            entries: pairs.into_iter().map(|(t, _)| t).collect(),
            index,
        })
    }

    pub fn pick<R: Rng>(&self, rng: &mut R) -> &T {
        &self.entries[self.index.sample(rng)]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcomes with ascending cumulative bounds in `(0, ceiling]`. A roll that
/// lands past the last bound selects nothing, which is how loot tables get
/// their implicit "no drop" band.
#[derive(Debug, Clone)]
pub struct CumulativeTable<T> {
    entries: Vec<(T, f64)>,
    ceiling: f64,
}

impl<T> CumulativeTable<T> {
    pub fn new(entries: Vec<(T, f64)>, ceiling: f64) -> Result<Self, GameError> {
        if ceiling <= 0.0 {
            return Err(GameError::InvalidContent("cumulative ceiling must be positive".into()));
        }
        let mut prev = 0.0;
        for (_, bound) in &entries {
            if *bound <= prev || *bound > ceiling {
                return Err(GameError::InvalidContent(format!(
                    "cumulative bound {bound} out of order or above ceiling {ceiling}"
                )));
            }
            prev = *bound;
        }
        Ok(Self { entries, ceiling })
    }

    /// Roll once. `None` means the roll landed in the empty band above the
    /// last bound.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&T> {
        let roll = rng.gen::<f64>() * self.ceiling;
        self.entries
            .iter()
            .find(|(_, bound)| roll < *bound)
            .map(|(t, _)| t)
    }
}

/// Draw an XP amount: Normal(level × mean_mult, level × sigma_mult),
/// truncated toward zero. Low-level draws can land negative on a bad roll.
pub fn xp_award<R: Rng>(rng: &mut R, level: u32, mean_mult: u32, sigma_mult: u32) -> i64 {
    let mu = (level * mean_mult) as f64;
    let sigma = (level * sigma_mult) as f64;
    match Normal::new(mu, sigma) {
        Ok(normal) => normal.sample(rng) as i64,
        Err(_) => mu as i64,
    }
}

/// [`xp_award`] floored at zero, for award sites where a win should never
/// read as an XP loss.
pub fn xp_award_floored<R: Rng>(rng: &mut R, level: u32, mean_mult: u32, sigma_mult: u32) -> i64 {
    xp_award(rng, level, mean_mult, sigma_mult).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weighted_table_rejects_zero_total() {
        assert!(WeightedTable::new(vec![("a", 0u32), ("b", 0u32)]).is_err());
    }

    #[test]
    fn weighted_table_picks_only_positive_weight() {
        let table = WeightedTable::new(vec![("never", 0), ("always", 7)]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            assert_eq!(*table.pick(&mut rng), "always");
        }
    }

    #[test]
    fn cumulative_table_rejects_unordered_bounds() {
        assert!(CumulativeTable::new(vec![("a", 0.5), ("b", 0.4)], 1.0).is_err());
        assert!(CumulativeTable::new(vec![("a", 1.2)], 1.0).is_err());
    }

    #[test]
    fn cumulative_table_leaves_empty_band() {
        let table = CumulativeTable::new(vec![("drop", 0.4)], 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let mut hits = 0usize;
        let mut misses = 0usize;
        for _ in 0..10_000 {
            match table.pick(&mut rng) {
                Some(_) => hits += 1,
                None => misses += 1,
            }
        }
        // ~40% hit band, wide tolerance
        assert!(hits > 3_000 && hits < 5_000, "hits={hits}");
        assert!(misses > 5_000);
    }

    #[test]
    fn xp_award_scales_with_level() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut total = 0i64;
        for _ in 0..2_000 {
            total += xp_award(&mut rng, 4, 25, 5);
        }
        let mean = total / 2_000;
        // Normal(100, 20): sample mean lands close to 100
        assert!((90..=110).contains(&mean), "mean={mean}");
    }

    #[test]
    fn floored_award_never_negative() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..5_000 {
            assert!(xp_award_floored(&mut rng, 1, 25, 5) >= 0);
        }
    }
}
