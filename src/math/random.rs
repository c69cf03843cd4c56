//! Seeded random source injected into design generators

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Deterministic stream of pseudo-random decisions
///
/// Two sources built from the same seed yield identical values for identical
/// call sequences. Every primitive advances the underlying state.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    draws: u64,
}

impl RandomSource {
    /// Create a source from an integer seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Number of primitives consumed so far
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Uniform float in `[low, high)`
    ///
    /// Returns `low` when the range is empty, still consuming one draw so the
    /// stream position does not depend on the arguments.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let unit = self.unit();
        if high <= low {
            return low;
        }
        unit.mul_add(high - low, low)
    }

    /// Uniform integer in `[low, high]`
    pub fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        self.draws += 1;
        if high <= low {
            // Keep the stream aligned with the non-degenerate case
            let _: u64 = self.rng.random();
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Bernoulli trial with success probability `probability`
    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability.clamp(0.0, 1.0)
    }

    /// Weighted random selection
    ///
    /// Returns index into weights array using cumulative distribution
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        let mut rand_val = self.unit() * total;
        if total <= 0.0 {
            return 0;
        }

        for (i, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights
            .iter()
            .rposition(|w| *w > 0.0)
            .unwrap_or_default()
    }

    /// Uniformly pick one element, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let last = items.len().checked_sub(1)? as i64;
        let index = self.uniform_int(0, last);
        items.get(index as usize)
    }

    fn unit(&mut self) -> f64 {
        self.draws += 1;
        self.rng.random::<f64>()
    }
}
