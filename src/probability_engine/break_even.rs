//! Break-even search: the largest bid still carrying a ≥50% chance.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::probability_engine::models::MAX_DICE;

/// The query both bid engines answer: chance that a bid of `bid` over
/// `total_dice` dice in play is truthful.
pub trait BidProbability {
    fn probability(&self, bid: usize, total_dice: usize) -> f64;
}

/// Binary search for the largest `bid` in `[0, total_dice]` whose
/// probability is still at least 0.5.
///
/// Relies on the engines' probabilities being non-increasing in the bid.
/// Returns 0 when `total_dice` is out of `[1, 40]`.
pub fn search(engine: &impl BidProbability, total_dice: usize) -> usize {
    if total_dice < 1 || total_dice > MAX_DICE {
        return 0;
    }

    let mut left = 0i64;
    let mut right = total_dice as i64;
    let mut result = 0usize;

    while left <= right {
        let mid = ((left + right) / 2) as usize;
        if engine.probability(mid, total_dice) >= 0.5 {
            result = mid;
            left = mid as i64 + 1;
        } else {
            right = mid as i64 - 1;
        }
    }

    result
}

/// Per-`total_dice` memo for [`search`]. Unbounded on purpose: the key
/// only ranges over 40 values.
pub struct BreakEvenCache {
    memo: Mutex<HashMap<usize, usize>>,
}

impl BreakEvenCache {
    pub fn new() -> Self {
        BreakEvenCache {
            memo: Mutex::new(HashMap::new()),
        }
    }

    pub fn get_or_search(&self, engine: &impl BidProbability, total_dice: usize) -> usize {
        if total_dice < 1 || total_dice > MAX_DICE {
            return 0;
        }

        {
            let memo = self.memo.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(&cached) = memo.get(&total_dice) {
                return cached;
            }
        }

        // Not held across the search: the engine may take its own locks.
        let result = search(engine, total_dice);
        let mut memo = self.memo.lock().unwrap_or_else(|e| e.into_inner());
        memo.insert(total_dice, result);
        result
    }

    pub fn clear(&self) {
        let mut memo = self.memo.lock().unwrap_or_else(|e| e.into_inner());
        memo.clear();
    }
}

impl Default for BreakEvenCache {
    fn default() -> Self {
        BreakEvenCache::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Step function: probability 1.0 up to a fixed bid, then 0.0.
    struct StepEngine {
        last_good: usize,
    }

    impl BidProbability for StepEngine {
        fn probability(&self, bid: usize, _total_dice: usize) -> f64 {
            if bid <= self.last_good {
                1.0
            } else {
                0.0
            }
        }
    }

    #[test]
    fn finds_the_step() {
        for last_good in 0..=12 {
            let engine = StepEngine { last_good };
            assert_eq!(search(&engine, 12), last_good);
        }
    }

    #[test]
    fn out_of_range_total_returns_zero() {
        let engine = StepEngine { last_good: 5 };
        assert_eq!(search(&engine, 0), 0);
        assert_eq!(search(&engine, 41), 0);
    }

    #[test]
    fn cache_returns_same_value() {
        let engine = StepEngine { last_good: 4 };
        let cache = BreakEvenCache::new();
        assert_eq!(cache.get_or_search(&engine, 9), 4);
        assert_eq!(cache.get_or_search(&engine, 9), 4);
    }
}
