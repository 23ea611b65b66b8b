//! The detector seam: anything that can report hands for a frame.

use super::{Hand, TrackerError};
use crate::draw::FrameBuffer;

/// A source of per-frame hand landmarks.
///
/// The production implementation is [`super::SidecarTracker`], which drives
/// an external detector process. Tests implement this with scripted hands to
/// exercise the full pipeline without a camera or a model.
///
/// Detection is independent per frame: no smoothing or identity contract is
/// relied upon. Zero hands is a normal result (an idle frame), never an
/// error. The first returned hand is the primary hand, the second (if any)
/// the secondary.
pub trait LandmarkSource {
    /// Detects hands in the given (already mirrored) frame.
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Vec<Hand>, TrackerError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed script of per-frame detections.
    pub struct ScriptedSource {
        frames: VecDeque<Vec<Hand>>,
    }

    impl ScriptedSource {
        pub fn new(frames: Vec<Vec<Hand>>) -> Self {
            Self {
                frames: frames.into(),
            }
        }
    }

    impl LandmarkSource for ScriptedSource {
        fn detect(&mut self, _frame: &FrameBuffer) -> Result<Vec<Hand>, TrackerError> {
            Ok(self.frames.pop_front().unwrap_or_default())
        }
    }
}
