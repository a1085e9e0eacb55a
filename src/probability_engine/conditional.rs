//! Bid probability conditioned on the player's own known dice.
//!
//! Knowing `m` of the `n` dice turns the question into "how many *more*
//! matches are needed among the `n - m` unknown dice", which is again the
//! specific-face binomial problem over a smaller pool.

use crate::probability_engine::binomial::{self, FACE_PROBABILITY};
use crate::probability_engine::cache::BoundedCache;
use crate::probability_engine::hand::HandConfiguration;
use crate::probability_engine::models::{percentage_string, ProbabilityTier, MAX_DICE};

const CACHE_CAPACITY: usize = 100;

/// Conditional estimator: `P(bid is truthful | the player's known hand)`.
///
/// The cache is keyed by the *reduced* problem `(remaining_needed,
/// unknown_dice)`, so different hands that leave the same residual question
/// share an entry.
pub struct ConditionalEngine {
    cache: BoundedCache<(usize, usize), f64>,
}

impl ConditionalEngine {
    pub fn new() -> Self {
        ConditionalEngine {
            cache: BoundedCache::new(CACHE_CAPACITY),
        }
    }

    /// Probability that at least `bid` of `total_dice` dice show the hand's
    /// bid face, given the dice already known in `hand`.
    ///
    /// Returns 0 unless `1 <= total_dice <= 40`, `bid <= total_dice`, and
    /// the hand fits inside `total_dice`.
    pub fn probability(&self, bid: usize, total_dice: usize, hand: &HandConfiguration) -> f64 {
        if total_dice < 1 || total_dice > MAX_DICE {
            return 0.0;
        }
        if bid > total_dice {
            return 0.0;
        }
        if hand.dice_count() > total_dice {
            return 0.0;
        }

        let my_matches = hand.count_matching_bid_face();
        let remaining_needed = bid as i64 - my_matches as i64;
        let unknown_dice = total_dice - hand.dice_count();

        log::debug!(
            "conditional: bid={} total={} face={} known={} matches={} -> need {} of {} unknown ({})",
            bid,
            total_dice,
            hand.bid_face(),
            hand.dice_count(),
            my_matches,
            remaining_needed,
            unknown_dice,
            hand.hand_summary()
        );

        // The known dice alone already satisfy the bid.
        if remaining_needed <= 0 {
            return 1.0;
        }
        let remaining_needed = remaining_needed as usize;

        // Even all unknown dice matching would not be enough.
        if remaining_needed > unknown_dice {
            return 0.0;
        }

        if let Some(cached) = self.cache.get(&(remaining_needed, unknown_dice)) {
            return cached;
        }

        let probability =
            binomial::binomial_tail(remaining_needed, unknown_dice, FACE_PROBABILITY);
        self.cache.put((remaining_needed, unknown_dice), probability);
        probability
    }

    /// Conditional probability rendered as an integer percentage string.
    pub fn percentage(&self, bid: usize, total_dice: usize, hand: &HandConfiguration) -> String {
        percentage_string(self.probability(bid, total_dice, hand))
    }

    /// Three-tier classification of the conditional probability.
    pub fn tier(
        &self,
        bid: usize,
        total_dice: usize,
        hand: &HandConfiguration,
    ) -> ProbabilityTier {
        ProbabilityTier::from_probability(self.probability(bid, total_dice, hand))
    }

    /// How much the known hand moves the estimate against a caller-supplied
    /// baseline (typically the unconditioned specific-face probability).
    pub fn probability_improvement(
        &self,
        bid: usize,
        total_dice: usize,
        hand: &HandConfiguration,
        original_probability: f64,
    ) -> f64 {
        self.probability(bid, total_dice, hand) - original_probability
    }

    /// Drop every memoized result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for ConditionalEngine {
    fn default() -> Self {
        ConditionalEngine::new()
    }
}
