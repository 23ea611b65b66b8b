//! Gesture interpretation: finger states + active mode → intended action.

use crate::tracking::{FingerState, Hand};
use crate::ui::Mode;
use crate::util;

/// The action a frame's hand pose asks for.
///
/// Produced once per frame by [`interpret`] and consumed by the painter
/// session, which owns all the state the action mutates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No recognized gesture; nothing is mutated, and notably the last pen
    /// position is left alone so a momentary detection dropout does not
    /// break a stroke.
    Idle,
    /// Draw a stroke segment ending at the index fingertip.
    Draw { at: (i32, i32) },
    /// Stamp the eraser at the middle fingertip.
    Erase { at: (i32, i32) },
    /// Hover/select: `probe` hit-tests the menu and palette, `indicator` is
    /// the on-screen feedback point between the index and middle tips.
    Hold {
        indicator: (i32, i32),
        probe: (i32, i32),
    },
    /// Two-hand pinch: resize the brush from the primary thumb–index
    /// distance. Carries the measurement geometry for preview feedback.
    AdjustThickness {
        distance: f32,
        thumb: (i32, i32),
        index: (i32, i32),
        /// Secondary-hand middle fingertip, where the size preview disc is
        /// drawn.
        preview: (i32, i32),
    },
}

/// Maps one frame's hand poses to a gesture.
///
/// The transition table is evaluated in strict priority order; the first
/// matching branch wins. All finger conditions are on the primary hand unless
/// stated otherwise.
///
/// 1. Thickness mode, with a secondary hand steadying (index + middle up,
///    ring down): adjust thickness from the primary thumb–index pinch.
/// 2. Eraser mode with index + middle + ring up: erase at the middle tip.
/// 3. Index + middle up, ring down: hold/select.
/// 4. Paint mode with the index up and middle + ring down: draw. The thumb
///    and pinky are deliberately ignored here; the thumb heuristic is the
///    least reliable classifier output.
/// 5. Anything else: idle.
pub fn interpret(
    mode: Mode,
    primary: &Hand,
    fingers: FingerState,
    secondary: Option<(&Hand, FingerState)>,
) -> Gesture {
    if mode == Mode::Thickness {
        if let Some((second_hand, second_fingers)) = secondary {
            if second_fingers.index && second_fingers.middle && !second_fingers.ring {
                let thumb = primary.thumb_tip();
                let index = primary.index_tip();
                return Gesture::AdjustThickness {
                    distance: util::distance(thumb, index),
                    thumb,
                    index,
                    preview: second_hand.middle_tip(),
                };
            }
        }
    }

    if mode == Mode::Eraser && fingers.index && fingers.middle && fingers.ring {
        return Gesture::Erase {
            at: primary.middle_tip(),
        };
    }

    if fingers.index && fingers.middle && !fingers.ring {
        let (ix, iy) = primary.index_tip();
        let (mx, _) = primary.middle_tip();
        return Gesture::Hold {
            indicator: (ix + (mx - ix) / 2, iy),
            probe: primary.middle_tip(),
        };
    }

    if mode == Mode::Paint && fingers.index && !fingers.middle && !fingers.ring {
        return Gesture::Draw {
            at: primary.index_tip(),
        };
    }

    Gesture::Idle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::test_support::hand_at;
    use crate::tracking::{INDEX_TIP, MIDDLE_TIP, RING_TIP, THUMB_TIP};

    fn fingers(index: bool, middle: bool, ring: bool) -> FingerState {
        FingerState {
            thumb: false,
            index,
            middle,
            ring,
            pinky: false,
        }
    }

    #[test]
    fn index_only_in_paint_mode_draws() {
        let hand = hand_at((100, 100), &[(INDEX_TIP, 120, 40)]);
        let gesture = interpret(Mode::Paint, &hand, fingers(true, false, false), None);
        assert_eq!(gesture, Gesture::Draw { at: (120, 40) });
    }

    #[test]
    fn index_only_outside_paint_mode_is_idle() {
        let hand = hand_at((100, 100), &[(INDEX_TIP, 120, 40)]);
        for mode in [Mode::Eraser, Mode::Thickness, Mode::Color, Mode::Hand] {
            let gesture = interpret(mode, &hand, fingers(true, false, false), None);
            assert_eq!(gesture, Gesture::Idle, "mode {mode:?}");
        }
    }

    #[test]
    fn index_and_middle_hold_beats_paint() {
        let hand = hand_at((100, 100), &[(INDEX_TIP, 80, 40), (MIDDLE_TIP, 120, 44)]);
        let gesture = interpret(Mode::Paint, &hand, fingers(true, true, false), None);
        assert_eq!(
            gesture,
            Gesture::Hold {
                indicator: (100, 40),
                probe: (120, 44),
            }
        );
    }

    #[test]
    fn three_fingers_in_eraser_mode_erases_at_middle_tip() {
        let hand = hand_at((100, 100), &[(MIDDLE_TIP, 130, 50)]);
        let gesture = interpret(Mode::Eraser, &hand, fingers(true, true, true), None);
        assert_eq!(gesture, Gesture::Erase { at: (130, 50) });
    }

    #[test]
    fn three_fingers_outside_eraser_mode_are_idle() {
        // Ring extended disqualifies Hold, and Draw needs middle down.
        let hand = hand_at((100, 100), &[]);
        let gesture = interpret(Mode::Paint, &hand, fingers(true, true, true), None);
        assert_eq!(gesture, Gesture::Idle);
    }

    #[test]
    fn thickness_needs_a_steadying_secondary_hand() {
        let primary = hand_at((100, 100), &[(THUMB_TIP, 100, 100), (INDEX_TIP, 160, 100)]);

        // No secondary hand: falls through (index up alone isn't Draw here,
        // mode is Thickness)
        let gesture = interpret(Mode::Thickness, &primary, fingers(true, false, false), None);
        assert_eq!(gesture, Gesture::Idle);

        // Secondary hand with the wrong pose: still no adjustment
        let secondary = hand_at((400, 100), &[(MIDDLE_TIP, 420, 60)]);
        let gesture = interpret(
            Mode::Thickness,
            &primary,
            fingers(true, false, false),
            Some((&secondary, fingers(true, true, true))),
        );
        assert_eq!(gesture, Gesture::Idle);

        // Correct steadying pose: adjustment with the pinch geometry
        let gesture = interpret(
            Mode::Thickness,
            &primary,
            fingers(true, false, false),
            Some((&secondary, fingers(true, true, false))),
        );
        assert_eq!(
            gesture,
            Gesture::AdjustThickness {
                distance: 60.0,
                thumb: (100, 100),
                index: (160, 100),
                preview: (420, 60),
            }
        );
    }

    #[test]
    fn thickness_branch_outranks_eraser_and_hold() {
        // Primary showing the eraser pose, but in Thickness mode with a
        // steadying hand the pinch wins.
        let primary = hand_at((100, 100), &[]);
        let secondary = hand_at((400, 100), &[]);
        let gesture = interpret(
            Mode::Thickness,
            &primary,
            fingers(true, true, true),
            Some((&secondary, fingers(true, true, false))),
        );
        assert!(matches!(gesture, Gesture::AdjustThickness { .. }));
    }

    #[test]
    fn no_extended_fingers_is_idle() {
        let hand = hand_at((100, 200), &[]);
        let gesture = interpret(Mode::Paint, &hand, fingers(false, false, false), None);
        assert_eq!(gesture, Gesture::Idle);
    }
}
