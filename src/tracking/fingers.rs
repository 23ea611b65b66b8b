//! Per-finger extended/retracted classification from raw keypoints.

use super::{Hand, INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP};

/// Extended/retracted flags for the five fingers of one hand.
///
/// Derived per hand per frame from static keypoint comparisons; never carried
/// across frames. When no hand was detected there simply is no `FingerState`
/// for that frame — callers treat the absence as "no gesture active".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

/// Classifies which fingers are extended.
///
/// # Precondition
///
/// The keypoints must come from a **horizontally mirrored** frame (the
/// controller flips every captured frame before detection) with an upright
/// hand facing the camera. The heuristic is orientation-dependent by design:
///
/// - Thumb: extended iff the tip (id 4) is left of the joint below it (id 3),
///   i.e. `tip.x < joint.x` in mirrored coordinates.
/// - Other fingers: extended iff the tip is above its PIP joint (the keypoint
///   two ids below the tip), i.e. `tip.y < pip.y` — smaller y is higher on
///   screen.
///
/// A sideways or upside-down hand will misclassify; that is accepted, this is
/// not a general pose estimator.
pub fn classify(hand: &Hand) -> FingerState {
    let up = |tip: usize| hand.keypoint(tip).y < hand.keypoint(tip - 2).y;

    FingerState {
        thumb: hand.keypoint(THUMB_TIP).x < hand.keypoint(THUMB_TIP - 1).x,
        index: up(INDEX_TIP),
        middle: up(MIDDLE_TIP),
        ring: up(RING_TIP),
        pinky: up(PINKY_TIP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::test_support::hand_at;

    #[test]
    fn index_above_pip_is_extended() {
        let hand = hand_at((100, 100), &[(INDEX_TIP, 100, 40)]);
        assert!(classify(&hand).index);
    }

    #[test]
    fn index_below_pip_is_retracted() {
        let hand = hand_at((100, 100), &[(INDEX_TIP, 100, 160)]);
        assert!(!classify(&hand).index);
    }

    #[test]
    fn thumb_compares_x_not_y() {
        // Tip left of the joint below it: extended
        let hand = hand_at((100, 100), &[(THUMB_TIP, 60, 100), (THUMB_TIP - 1, 90, 100)]);
        assert!(classify(&hand).thumb);

        // Tip right of the joint: retracted, regardless of height
        let hand = hand_at((100, 100), &[(THUMB_TIP, 120, 10), (THUMB_TIP - 1, 90, 100)]);
        assert!(!classify(&hand).thumb);
    }

    #[test]
    fn each_finger_uses_its_own_tip_and_pip() {
        let hand = hand_at(
            (100, 100),
            &[
                (INDEX_TIP, 100, 50),
                (MIDDLE_TIP, 100, 150),
                (RING_TIP, 100, 50),
                (PINKY_TIP, 100, 150),
            ],
        );
        let state = classify(&hand);
        assert!(state.index);
        assert!(!state.middle);
        assert!(state.ring);
        assert!(!state.pinky);
    }
}
