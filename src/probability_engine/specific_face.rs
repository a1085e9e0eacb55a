//! Probability that at least `k` dice show one *specific* face value.

use crate::probability_engine::binomial::{self, FACE_PROBABILITY};
use crate::probability_engine::break_even::{BidProbability, BreakEvenCache};
use crate::probability_engine::cache::BoundedCache;
use crate::probability_engine::models::{percentage_string, ProbabilityTier, MAX_DICE};

const CACHE_CAPACITY: usize = 200;

/// Exact binomial engine: `P(X ≥ k)` for `X ~ Binomial(n, 1/6)`.
///
/// Construct one and share it; results are memoized in a bounded cache.
/// Every query is non-panicking — out-of-range inputs yield probability 0.
pub struct SpecificFaceEngine {
    cache: BoundedCache<(usize, usize), f64>,
    break_even: BreakEvenCache,
}

impl SpecificFaceEngine {
    pub fn new() -> Self {
        SpecificFaceEngine {
            cache: BoundedCache::new(CACHE_CAPACITY),
            break_even: BreakEvenCache::new(),
        }
    }

    /// Probability that at least `bid` of `total_dice` dice show the
    /// specific face being bid on.
    ///
    /// Returns 0 unless `1 <= total_dice <= 40` and `bid <= total_dice`.
    pub fn probability(&self, bid: usize, total_dice: usize) -> f64 {
        if total_dice < 1 || total_dice > MAX_DICE {
            return 0.0;
        }
        if bid > total_dice {
            return 0.0;
        }
        if bid == 0 {
            return 1.0;
        }

        if let Some(cached) = self.cache.get(&(bid, total_dice)) {
            return cached;
        }

        let probability = binomial::binomial_tail(bid, total_dice, FACE_PROBABILITY);
        self.cache.put((bid, total_dice), probability);
        probability
    }

    /// Probability rendered as an integer percentage string, e.g. `"42%"`.
    pub fn percentage(&self, bid: usize, total_dice: usize) -> String {
        percentage_string(self.probability(bid, total_dice))
    }

    /// Three-tier classification of the bid's probability.
    pub fn tier(&self, bid: usize, total_dice: usize) -> ProbabilityTier {
        ProbabilityTier::from_probability(self.probability(bid, total_dice))
    }

    /// Largest bid over `total_dice` dice with probability still ≥ 50%.
    /// Memoized per `total_dice`.
    pub fn break_even_bid(&self, total_dice: usize) -> usize {
        self.break_even.get_or_search(self, total_dice)
    }

    /// Drop every memoized result.
    pub fn clear_cache(&self) {
        self.cache.clear();
        self.break_even.clear();
    }
}

impl Default for SpecificFaceEngine {
    fn default() -> Self {
        SpecificFaceEngine::new()
    }
}

impl BidProbability for SpecificFaceEngine {
    fn probability(&self, bid: usize, total_dice: usize) -> f64 {
        SpecificFaceEngine::probability(self, bid, total_dice)
    }
}
