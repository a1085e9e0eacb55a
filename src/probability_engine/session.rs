//! Session state a display layer drives: the current bid, the dice in play,
//! the player's hand, and freshly computed probability readings for all of
//! them.
//!
//! Every mutator clamps its input into the legal range and recomputes the
//! affected snapshots, so a display can always render the current fields
//! without asking the engines itself.

use crate::probability_engine::any_face::AnyFaceEngine;
use crate::probability_engine::conditional::ConditionalEngine;
use crate::probability_engine::hand::HandConfiguration;
use crate::probability_engine::models::{ProbabilitySnapshot, MAX_DICE, MAX_FACE, MIN_FACE};
use crate::probability_engine::specific_face::SpecificFaceEngine;

const MIN_DICE: usize = 1;

const DEFAULT_TOTAL_DICE: usize = 10;
const DEFAULT_BID: usize = 2;
const DEFAULT_BID_FACE: u8 = 1;

/// One player's view of a Liar's Dice round, with probability readings kept
/// current after every change.
///
/// The engines are injected at construction and shared-by-ownership; there
/// are no global singletons. [`BidSession::default`] wires up fresh engines
/// for the common case.
pub struct BidSession {
    any_face: AnyFaceEngine,
    specific_face: SpecificFaceEngine,
    conditional: ConditionalEngine,

    total_dice: usize,
    current_bid: usize,
    bid_face: u8,
    my_dice_count: usize,
    hand: Option<HandConfiguration>,

    bid_odds: ProbabilitySnapshot,
    specific_odds: ProbabilitySnapshot,
    conditional_odds: ProbabilitySnapshot,
    break_even_bid: usize,
}

impl BidSession {
    pub fn new(
        any_face: AnyFaceEngine,
        specific_face: SpecificFaceEngine,
        conditional: ConditionalEngine,
    ) -> Self {
        let mut session = BidSession {
            any_face,
            specific_face,
            conditional,
            total_dice: DEFAULT_TOTAL_DICE,
            current_bid: DEFAULT_BID,
            bid_face: DEFAULT_BID_FACE,
            my_dice_count: 0,
            hand: None,
            bid_odds: ProbabilitySnapshot::zero(),
            specific_odds: ProbabilitySnapshot::zero(),
            conditional_odds: ProbabilitySnapshot::zero(),
            break_even_bid: 0,
        };
        session.refresh_all();
        session
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn total_dice(&self) -> usize {
        self.total_dice
    }

    pub fn current_bid(&self) -> usize {
        self.current_bid
    }

    pub fn bid_face(&self) -> u8 {
        self.bid_face
    }

    pub fn my_dice_count(&self) -> usize {
        self.my_dice_count
    }

    pub fn hand(&self) -> Option<&HandConfiguration> {
        self.hand.as_ref()
    }

    /// Any-face reading for the current bid: "how likely is it that *some*
    /// face appears this often".
    pub fn bid_odds(&self) -> &ProbabilitySnapshot {
        &self.bid_odds
    }

    /// Specific-face reading for the current bid, ignoring the hand.
    pub fn specific_odds(&self) -> &ProbabilitySnapshot {
        &self.specific_odds
    }

    /// Conditional reading given the entered hand; zeroed while no hand
    /// configuration exists.
    pub fn conditional_odds(&self) -> &ProbabilitySnapshot {
        &self.conditional_odds
    }

    /// Largest any-face bid still at ≥50% for the current dice count.
    pub fn break_even_bid(&self) -> usize {
        self.break_even_bid
    }

    /// True while the current bid has not yet passed the break-even point.
    pub fn is_above_break_even(&self) -> bool {
        self.current_bid <= self.break_even_bid
    }

    /// Conditional probability minus the specific-face baseline; 0 while no
    /// hand is entered.
    pub fn probability_improvement(&self) -> f64 {
        match &self.hand {
            Some(hand) => self.conditional.probability_improvement(
                self.current_bid,
                self.total_dice,
                hand,
                self.specific_odds.probability,
            ),
            None => 0.0,
        }
    }

    /// Signed percentage rendering of the improvement: `"+N%"`, `"-N%"`, or
    /// `"±0%"` when within a percent of even.
    pub fn improvement_string(&self) -> String {
        let improvement = self.probability_improvement();
        let percentage = (improvement.abs() * 100.0).round() as i64;

        if improvement > 0.01 {
            format!("+{percentage}%")
        } else if improvement < -0.01 {
            format!("-{percentage}%")
        } else {
            "±0%".to_string()
        }
    }

    // ------------------------------------------------------------------
    // Bid and dice-count mutations
    // ------------------------------------------------------------------

    /// Change the number of dice in play, clamped into `[1, 40]`.
    ///
    /// A changed count invalidates the game context: the bid is re-clamped
    /// and any entered hand is discarded.
    pub fn set_total_dice(&mut self, count: usize) {
        let count = count.clamp(MIN_DICE, MAX_DICE);
        if count == self.total_dice {
            return;
        }

        self.total_dice = count;
        self.current_bid = self.current_bid.min(count);
        self.my_dice_count = self.my_dice_count.min(count);
        if self.hand.is_some() {
            log::debug!("total dice changed to {count}, discarding hand");
            self.discard_hand();
        }
        self.refresh_all();
    }

    pub fn increment_dice(&mut self) {
        self.set_total_dice(self.total_dice + 1);
    }

    pub fn decrement_dice(&mut self) {
        self.set_total_dice(self.total_dice.saturating_sub(1).max(MIN_DICE));
    }

    /// Change the claimed bid count, clamped into `[0, total_dice]`.
    pub fn set_bid(&mut self, bid: usize) {
        let bid = bid.min(self.total_dice);
        if bid == self.current_bid {
            return;
        }
        self.current_bid = bid;
        self.refresh_all();
    }

    pub fn increment_bid(&mut self) {
        self.set_bid(self.current_bid + 1);
    }

    pub fn decrement_bid(&mut self) {
        self.set_bid(self.current_bid.saturating_sub(1));
    }

    /// Change the face being bid on, clamped into `[1, 6]` and synced into
    /// the hand configuration.
    pub fn set_bid_face(&mut self, face: u8) {
        let face = face.clamp(MIN_FACE, MAX_FACE);
        if face == self.bid_face {
            return;
        }
        self.bid_face = face;
        if let Some(hand) = &mut self.hand {
            hand.set_bid_face(face);
        }
        self.refresh_all();
    }

    // ------------------------------------------------------------------
    // Hand lifecycle
    // ------------------------------------------------------------------

    /// Change how many dice the player holds, clamped into
    /// `[0, total_dice]`.
    ///
    /// Shrinking (or dropping to zero) discards the entered hand; growing
    /// resizes it in place, preserving already-entered values.
    pub fn set_my_dice_count(&mut self, count: usize) {
        let count = count.min(self.total_dice);
        if count == self.my_dice_count {
            return;
        }

        let previous = self.my_dice_count;
        self.my_dice_count = count;

        if count < previous || count == 0 {
            self.discard_hand();
        } else if let Some(hand) = self.hand.take() {
            log::debug!("my dice count grew {previous} -> {count}, resizing hand");
            self.hand = Some(hand.resized(count));
        }
        self.refresh_conditional();
    }

    /// Start (or restart) hand entry with all dice unset. Clears the hand
    /// when the player holds no dice.
    pub fn initialize_hand(&mut self) {
        if self.my_dice_count == 0 {
            self.discard_hand();
        } else {
            self.hand = Some(HandConfiguration::new(self.my_dice_count, self.bid_face));
        }
        self.refresh_conditional();
    }

    /// Record one of the player's dice. Returns `false` (no change) for an
    /// invalid index/value or when no hand entry is in progress.
    pub fn set_hand_die(&mut self, index: usize, value: Option<u8>) -> bool {
        let Some(hand) = &mut self.hand else {
            log::debug!("set_hand_die({index}) with no hand configuration");
            return false;
        };

        if !hand.set_die(index, value) {
            return false;
        }
        log::debug!("hand updated: {}", hand.hand_summary());
        self.refresh_conditional();
        true
    }

    /// Discard the entered hand and zero the conditional reading.
    pub fn reset_hand(&mut self) {
        self.discard_hand();
        self.refresh_conditional();
    }

    fn discard_hand(&mut self) {
        self.hand = None;
        self.conditional_odds = ProbabilitySnapshot::zero();
    }

    // ------------------------------------------------------------------
    // Snapshot refresh
    // ------------------------------------------------------------------

    fn refresh_all(&mut self) {
        self.bid_odds = ProbabilitySnapshot::new(
            self.any_face.probability(self.current_bid, self.total_dice),
        );
        self.break_even_bid = self.any_face.break_even_bid(self.total_dice);
        self.specific_odds = ProbabilitySnapshot::new(
            self.specific_face.probability(self.current_bid, self.total_dice),
        );
        self.refresh_conditional();
    }

    fn refresh_conditional(&mut self) {
        self.conditional_odds = match &self.hand {
            Some(hand) => ProbabilitySnapshot::new(self.conditional.probability(
                self.current_bid,
                self.total_dice,
                hand,
            )),
            None => ProbabilitySnapshot::zero(),
        };
    }
}

impl Default for BidSession {
    fn default() -> Self {
        BidSession::new(
            AnyFaceEngine::new(),
            SpecificFaceEngine::new(),
            ConditionalEngine::new(),
        )
    }
}
