//! The player's own dice: a fixed-size sequence of optional face values plus
//! the face currently being bid on.

use serde::{Deserialize, Serialize};

use crate::probability_engine::models::{MAX_FACE, MIN_FACE};

/// The player's known dice and the bid face they are being judged against.
///
/// The slot count is fixed at construction; a change in how many dice the
/// player holds means building a new configuration (see [`resized`]), not
/// mutating this one. Every mutator is non-panicking: invalid indices or
/// face values are rejected with `false` and leave the state unchanged.
///
/// [`resized`]: HandConfiguration::resized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandConfiguration {
    dice_count: usize,
    face_values: Vec<Option<u8>>,
    bid_face: u8,
}

impl HandConfiguration {
    /// Build a configuration with every slot unset.
    ///
    /// `bid_face` is clamped into `[1, 6]`. A zero `dice_count` is a caller
    /// bug, not a runtime condition, and asserts.
    pub fn new(dice_count: usize, bid_face: u8) -> Self {
        assert!(dice_count > 0, "dice count must be positive");
        HandConfiguration {
            dice_count,
            face_values: vec![None; dice_count],
            bid_face: bid_face.clamp(MIN_FACE, MAX_FACE),
        }
    }

    pub fn dice_count(&self) -> usize {
        self.dice_count
    }

    pub fn bid_face(&self) -> u8 {
        self.bid_face
    }

    /// Change the bid face. Out-of-range values are silently rejected and
    /// the previous face is retained.
    pub fn set_bid_face(&mut self, face: u8) {
        if (MIN_FACE..=MAX_FACE).contains(&face) {
            self.bid_face = face;
        }
    }

    /// Set one die to a face value, or clear it with `None`.
    ///
    /// Returns `false` (no mutation) for an out-of-range index or a
    /// non-`None` value outside `[1, 6]`.
    pub fn set_die(&mut self, index: usize, value: Option<u8>) -> bool {
        if index >= self.dice_count {
            return false;
        }
        if let Some(face) = value {
            if !(MIN_FACE..=MAX_FACE).contains(&face) {
                return false;
            }
        }
        self.face_values[index] = value;
        true
    }

    /// The stored face for one die; `None` if unset or the index is
    /// out of range.
    pub fn get_die(&self, index: usize) -> Option<u8> {
        self.face_values.get(index).copied().flatten()
    }

    /// How many set dice show `face`. Faces outside `[1, 6]` count zero.
    pub fn count_matching(&self, face: u8) -> usize {
        if !(MIN_FACE..=MAX_FACE).contains(&face) {
            return 0;
        }
        self.face_values.iter().flatten().filter(|&&v| v == face).count()
    }

    /// How many set dice show the current bid face.
    pub fn count_matching_bid_face(&self) -> usize {
        self.count_matching(self.bid_face)
    }

    /// True once every slot has a face value.
    pub fn is_complete(&self) -> bool {
        self.face_values.iter().all(|v| v.is_some())
    }

    /// True if at least one slot has a face value.
    pub fn has_any_set(&self) -> bool {
        self.face_values.iter().any(|v| v.is_some())
    }

    /// Number of slots that currently hold a face value.
    pub fn count_set(&self) -> usize {
        self.face_values.iter().flatten().count()
    }

    /// Clear every slot.
    pub fn reset(&mut self) {
        self.face_values = vec![None; self.dice_count];
    }

    /// Clear one slot. Same bounds contract as [`set_die`].
    ///
    /// [`set_die`]: HandConfiguration::set_die
    pub fn reset_die(&mut self, index: usize) -> bool {
        self.set_die(index, None)
    }

    /// Apply [`set_die`] over a list of indices.
    ///
    /// Best-effort: valid indices are applied even when others fail, and
    /// the return value is `true` only if every single call succeeded.
    ///
    /// [`set_die`]: HandConfiguration::set_die
    pub fn set_dice(&mut self, indices: &[usize], value: Option<u8>) -> bool {
        let mut success = true;
        for &index in indices {
            if !self.set_die(index, value) {
                success = false;
            }
        }
        success
    }

    /// Build a configuration with a different slot count, carrying over the
    /// face values at indices present in both. Used when the player's dice
    /// count changes mid-game.
    pub fn resized(&self, dice_count: usize) -> HandConfiguration {
        let mut resized = HandConfiguration::new(dice_count, self.bid_face);
        for index in 0..self.dice_count.min(dice_count) {
            resized.face_values[index] = self.face_values[index];
        }
        resized
    }

    /// English summary of the set dice, e.g. `"2 fives, 1 three"`.
    pub fn hand_summary(&self) -> String {
        const NAMES: [&str; 6] = ["one", "two", "three", "four", "five", "six"];

        let parts: Vec<String> = (MIN_FACE..=MAX_FACE)
            .filter_map(|face| {
                let count = self.count_matching(face);
                if count == 0 {
                    return None;
                }
                let name = NAMES[(face - 1) as usize];
                let plural = if count > 1 { "s" } else { "" };
                Some(format!("{count} {name}{plural}"))
            })
            .collect();

        if parts.is_empty() {
            "No dice set".to_string()
        } else {
            parts.join(", ")
        }
    }
}
