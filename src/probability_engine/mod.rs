//! Core probability engine — binomial statistics over six-sided dice.
//!
//! ## Module overview
//!
//! | Module          | Purpose |
//! |-----------------|---------|
//! | `models`        | Shared types: tiers, percentage strings, snapshots, range constants |
//! | `binomial`      | Log-space binomial/Poisson kernels (pure functions) |
//! | `cache`         | Bounded, mutex-guarded probability memo |
//! | `specific_face` | P(at least k dice show one named face) |
//! | `any_face`      | P(some face appears at least k times), table-backed estimates |
//! | `conditional`   | Bid probability given the player's known hand |
//! | `hand`          | `HandConfiguration`: the player's own dice and bid face |
//! | `break_even`    | Largest bid still at ≥50%, binary search + memo |
//! | `session`       | `BidSession`: clamped game state with live readings |

pub mod any_face;
pub mod binomial;
pub mod break_even;
pub mod cache;
pub mod conditional;
pub mod hand;
pub mod models;
pub mod session;
pub mod specific_face;

// Re-export the public API surface so callers can use
// `probability_engine::SpecificFaceEngine` without reaching into sub-modules.
pub use any_face::AnyFaceEngine;
pub use break_even::BidProbability;
pub use conditional::ConditionalEngine;
pub use hand::HandConfiguration;
pub use models::{
    percentage_string, ProbabilitySnapshot, ProbabilityTier, MAX_DICE, MAX_FACE, MIN_FACE,
};
pub use session::BidSession;
pub use specific_face::SpecificFaceEngine;
