//! Probability that *some* face — any of the six — appears at least `k`
//! times among `n` dice.
//!
//! The exact answer sums over partitions of the six face counts and is
//! combinatorially expensive, so this engine trades exactness for a
//! precomputed table of estimates: a birthday-style exact complement where
//! that is cheap, a Poisson-per-face model combined across faces in the
//! general regime, and Poisson-tail / Chernoff bounds deep in the right
//! tail. The regime thresholds are tuned constants; changing them changes
//! every displayed percentage downstream.

use crate::probability_engine::binomial;
use crate::probability_engine::break_even::{BidProbability, BreakEvenCache};
use crate::probability_engine::models::{percentage_string, ProbabilityTier, MAX_DICE};

/// Table-backed estimator of `P(∃ face appearing ≥ k times among n dice)`.
///
/// The triangular table over `0 ≤ k ≤ n ≤ 40` is filled eagerly at
/// construction; queries afterwards are index arithmetic on immutable data.
pub struct AnyFaceEngine {
    table: Vec<f64>,
    break_even: BreakEvenCache,
}

impl AnyFaceEngine {
    pub fn new() -> Self {
        let mut table = Vec::with_capacity(Self::index(MAX_DICE, MAX_DICE) + 1);
        for n in 0..=MAX_DICE {
            for k in 0..=n {
                table.push(Self::compute_entry(n, k));
            }
        }
        AnyFaceEngine {
            table,
            break_even: BreakEvenCache::new(),
        }
    }

    /// Flattened position of `(n, k)` in the triangular table.
    fn index(n: usize, k: usize) -> usize {
        n * (n + 1) / 2 + k
    }

    /// Probability that at least `bid` of `total_dice` dice agree on some
    /// face. Returns 0 unless `1 <= total_dice <= 40` and `bid <= total_dice`.
    pub fn probability(&self, bid: usize, total_dice: usize) -> f64 {
        if total_dice < 1 || total_dice > MAX_DICE {
            return 0.0;
        }
        if bid > total_dice {
            return 0.0;
        }
        self.table[Self::index(total_dice, bid)]
    }

    /// Probability rendered as an integer percentage string, e.g. `"80%"`.
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

    // ------------------------------------------------------------------
    // Table fill
    // ------------------------------------------------------------------

    fn compute_entry(n: usize, k: usize) -> f64 {
        // Some face trivially appears at least zero times; and with n >= 1
        // dice, at least one face appears at least once.
        if k <= 1 {
            return 1.0;
        }

        // Cheap exact answer for the pair question on small hands.
        if k == 2 && n <= 10 {
            return Self::distinct_complement(n);
        }

        let nf = n as f64;
        let skew_threshold = nf / 6.0 + 3.0 * (5.0 * nf / 36.0).sqrt();
        if k as f64 > skew_threshold {
            Self::right_tail_estimate(n, k)
        } else {
            Self::union_estimate(n, k)
        }
    }

    /// Exact complement of "all dice show distinct faces":
    /// `1 - (6·5·…·(6-n+1)) / 6^n`. All-distinct is impossible once n > 6.
    fn distinct_complement(n: usize) -> f64 {
        if n > 6 {
            return 1.0;
        }
        let mut all_distinct = 1.0;
        for i in 0..n {
            all_distinct *= (6 - i) as f64 / 6.0;
        }
        1.0 - all_distinct
    }

    /// General regime: model one face's count as Poisson(n/6), then combine
    /// the six faces with the complement-of-misses formula `1 - (1-p)^6`.
    fn union_estimate(n: usize, k: usize) -> f64 {
        let lambda = n as f64 / 6.0;
        let per_face = Self::poisson_tail(k, n, lambda);
        (1.0 - (1.0 - per_face).powi(6)).min(1.0)
    }

    /// Right-tail regime: six times the per-face Poisson tail, tightened by
    /// a Chernoff-style bound `6·exp(-(k-λ)²/(2λ))` once `k > λ + 4√λ`.
    fn right_tail_estimate(n: usize, k: usize) -> f64 {
        let lambda = n as f64 / 6.0;
        let tail = Self::poisson_tail(k, n, lambda);
        let mut estimate = (6.0 * tail).min(1.0);

        if k as f64 > lambda + 4.0 * lambda.sqrt() {
            let deviation = k as f64 - lambda;
            let chernoff = 6.0 * (-(deviation * deviation) / (2.0 * lambda)).exp();
            estimate = estimate.min(chernoff);
        }

        estimate.min(1.0)
    }

    /// `Σ_{j=k..n} P(J = j)` for `J ~ Poisson(lambda)`, truncated at `n`.
    fn poisson_tail(k: usize, n: usize, lambda: f64) -> f64 {
        (k..=n).map(|j| binomial::poisson_pmf(j, lambda)).sum()
    }
}

impl Default for AnyFaceEngine {
    fn default() -> Self {
        AnyFaceEngine::new()
    }
}

impl BidProbability for AnyFaceEngine {
    fn probability(&self, bid: usize, total_dice: usize) -> f64 {
        AnyFaceEngine::probability(self, bid, total_dice)
    }
}
