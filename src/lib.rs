//! # liars_dice_odds
//!
//! A companion calculator for the game Liar's Dice: given a claimed bid,
//! how likely is it to be truthful?
//!
//! Everything is binomial statistics over fair six-sided dice, bounded at
//! 40 dice in play. Three engines answer three flavors of the question:
//!
//! 1. [`SpecificFaceEngine`] — at least `k` of `n` dice show one *named*
//!    face (exact binomial tail, `p = 1/6`).
//! 2. [`AnyFaceEngine`] — *some* face, any of the six, appears at least
//!    `k` times (precomputed table of statistical estimates).
//! 3. [`ConditionalEngine`] — the specific-face question given the dice
//!    the player already sees in their own [`HandConfiguration`].
//!
//! Each engine also renders percentage strings (`"75%"`), classifies
//! results into a three-tier [`ProbabilityTier`], and finds the break-even
//! bid — the largest claim still carrying at least a 50% chance.
//!
//! ## Key properties
//!
//! - **Non-panicking**: out-of-range bids, dice counts, faces, and indices
//!   return safe defaults (probability 0, `false`, `None`) instead of
//!   failing.
//! - **Deterministic**: identical inputs return bit-identical results,
//!   cache hit or not.
//! - **Injectable**: engines are plain values you construct and share; no
//!   global state.
//!
//! ## Quick start
//!
//! ```rust
//! use liars_dice_odds::{BidSession, SpecificFaceEngine};
//!
//! // Direct engine queries:
//! let engine = SpecificFaceEngine::new();
//! assert_eq!(engine.percentage(2, 10), "52%");
//! assert_eq!(engine.break_even_bid(6), 1);
//!
//! // Or drive a whole round through a session:
//! let mut session = BidSession::default();
//! session.set_total_dice(15);
//! session.set_bid(4);
//! session.set_bid_face(5);
//! println!(
//!     "bid odds {} ({}), break-even at {}",
//!     session.bid_odds().percentage,
//!     session.bid_odds().tier,
//!     session.break_even_bid(),
//! );
//!
//! // Enter your own dice for a conditional reading:
//! session.set_my_dice_count(3);
//! session.initialize_hand();
//! session.set_hand_die(0, Some(5));
//! session.set_hand_die(1, Some(5));
//! println!(
//!     "knowing your hand: {} ({})",
//!     session.conditional_odds().percentage,
//!     session.improvement_string(),
//! );
//! ```

pub mod probability_engine;

// Convenience re-exports so callers can use `liars_dice_odds::AnyFaceEngine`
// directly without reaching into `probability_engine::`.
pub use probability_engine::{
    percentage_string, AnyFaceEngine, BidProbability, BidSession, ConditionalEngine,
    HandConfiguration, ProbabilitySnapshot, ProbabilityTier, SpecificFaceEngine, MAX_DICE,
    MAX_FACE, MIN_FACE,
};
