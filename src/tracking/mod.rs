//! Hand landmark types and the black-box detector seam.
//!
//! Hand pose estimation itself is delegated to an external pre-trained
//! landmark detector (see [`sidecar`]); this module only defines the shape of
//! its output — up to two hands per frame, each exactly 21 keypoints in a
//! fixed anatomical order — and the per-finger classifier derived from it.

pub mod fingers;
pub mod sidecar;
pub mod source;

pub use fingers::FingerState;
pub use sidecar::SidecarTracker;
pub use source::LandmarkSource;

use thiserror::Error;

/// Number of keypoints the detector reports per hand.
pub const KEYPOINT_COUNT: usize = 21;

/// Thumb tip keypoint id.
pub const THUMB_TIP: usize = 4;
/// Index fingertip keypoint id.
pub const INDEX_TIP: usize = 8;
/// Middle fingertip keypoint id.
pub const MIDDLE_TIP: usize = 12;
/// Ring fingertip keypoint id.
pub const RING_TIP: usize = 16;
/// Pinky fingertip keypoint id.
pub const PINKY_TIP: usize = 20;

/// One detected landmark: anatomical id plus pixel position.
///
/// Produced fresh every frame; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keypoint {
    /// Anatomical landmark id, 0..=20
    pub id: u8,
    /// Pixel column
    pub x: i32,
    /// Pixel row
    pub y: i32,
}

/// One detected hand: exactly [`KEYPOINT_COUNT`] keypoints, indexed by
/// anatomical id. Lives for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    points: [Keypoint; KEYPOINT_COUNT],
}

impl Hand {
    /// Builds a hand from detector output, rejecting malformed payloads.
    ///
    /// The detector's contract guarantees 21 points per hand; anything else
    /// is a protocol violation and the caller fails fast rather than risking
    /// an out-of-bounds index later.
    pub fn from_points(points: Vec<Keypoint>) -> Result<Self, TrackerError> {
        let count = points.len();
        let points: [Keypoint; KEYPOINT_COUNT] = points
            .try_into()
            .map_err(|_| TrackerError::MalformedHand { count })?;
        Ok(Self { points })
    }

    /// Returns the keypoint with the given anatomical id.
    ///
    /// Ids above 20 are a programmer error, not a runtime condition.
    pub fn keypoint(&self, id: usize) -> Keypoint {
        self.points[id]
    }

    /// Pixel position of the keypoint with the given anatomical id.
    pub fn position(&self, id: usize) -> (i32, i32) {
        let kp = self.points[id];
        (kp.x, kp.y)
    }

    /// Thumb tip position.
    pub fn thumb_tip(&self) -> (i32, i32) {
        self.position(THUMB_TIP)
    }

    /// Index fingertip position.
    pub fn index_tip(&self) -> (i32, i32) {
        self.position(INDEX_TIP)
    }

    /// Middle fingertip position.
    pub fn middle_tip(&self) -> (i32, i32) {
        self.position(MIDDLE_TIP)
    }
}

/// Errors from the landmark detector bridge.
///
/// All of these are fatal to the frame loop: there is no degraded mode and no
/// reconnect logic. "No hand detected" is not an error — it is an empty
/// result treated as an idle frame.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("failed to spawn tracker process `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("tracker process I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("tracker process closed its output stream")]
    Eof,

    #[error("failed to encode frame for the tracker: {0}")]
    Encode(#[from] image::ImageError),

    #[error("malformed tracker reply: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("detector reported {count} keypoints for a hand, expected 21")]
    MalformedHand { count: usize },
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds a hand with every keypoint at `base`, then applies the given
    /// (id, x, y) overrides. Keeps gesture and classifier tests terse.
    pub fn hand_at(base: (i32, i32), overrides: &[(usize, i32, i32)]) -> Hand {
        let mut points: Vec<Keypoint> = (0..KEYPOINT_COUNT)
            .map(|id| Keypoint {
                id: id as u8,
                x: base.0,
                y: base.1,
            })
            .collect();
        for &(id, x, y) in overrides {
            points[id].x = x;
            points[id].y = y;
        }
        Hand::from_points(points).unwrap()
    }
}
