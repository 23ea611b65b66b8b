//! Bridge to the external landmark detector process.
//!
//! The detector (a pre-trained hand landmark model) runs as a child process
//! so the model runtime stays out of this crate entirely. The wire protocol
//! is deliberately small:
//!
//! - **stdin**: one frame per request, JPEG-encoded, prefixed with a `u32`
//!   little-endian byte length.
//! - **stdout**: exactly one JSON line per frame,
//!   `{"hands": [{"points": [[x, y], ...]}]}` with 21 points per hand and
//!   coordinates normalized to `0.0..=1.0` of the frame dimensions.
//!
//! Detector configuration (max hands, confidence thresholds) is passed once
//! as command-line arguments at spawn. Any protocol violation is fatal; there
//! is no retry or reconnect path.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use image::{ExtendedColorType, codecs::jpeg::JpegEncoder};
use serde::Deserialize;

use super::{Hand, KEYPOINT_COUNT, Keypoint, LandmarkSource, TrackerError};
use crate::config::TrackerConfig;
use crate::draw::FrameBuffer;

/// JPEG quality for frames sent to the detector. Detection is tolerant to
/// compression artifacts well below this level.
const FRAME_JPEG_QUALITY: u8 = 80;

#[derive(Debug, Deserialize)]
struct Reply {
    #[serde(default)]
    hands: Vec<HandReply>,
}

#[derive(Debug, Deserialize)]
struct HandReply {
    points: Vec<(f32, f32)>,
}

/// Drives the external detector process over pipes.
pub struct SidecarTracker {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    line: String,
    jpeg: Vec<u8>,
    rgb: Vec<u8>,
}

impl SidecarTracker {
    /// Spawns the detector process described by the tracker config.
    pub fn spawn(config: &TrackerConfig) -> Result<Self, TrackerError> {
        let mut child = Command::new(&config.command)
            .arg("--max-hands")
            .arg(config.max_hands.to_string())
            .arg("--min-detection-confidence")
            .arg(config.min_detection_confidence.to_string())
            .arg("--min-tracking-confidence")
            .arg(config.min_tracking_confidence.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| TrackerError::Spawn {
                command: config.command.clone(),
                source,
            })?;

        // Both pipes were requested above; absence is a spawn bug, not a
        // runtime condition.
        let stdin = child.stdin.take().expect("tracker stdin piped");
        let stdout = child.stdout.take().expect("tracker stdout piped");

        log::info!(
            "Spawned landmark tracker `{}` (pid {}, max {} hands)",
            config.command,
            child.id(),
            config.max_hands
        );

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            line: String::new(),
            jpeg: Vec::new(),
            rgb: Vec::new(),
        })
    }

    fn encode_frame(&mut self, frame: &FrameBuffer) -> Result<(), TrackerError> {
        self.rgb.clear();
        self.rgb.reserve(frame.pixels.len() * 3);
        for &px in &frame.pixels {
            self.rgb.push((px >> 16) as u8);
            self.rgb.push((px >> 8) as u8);
            self.rgb.push(px as u8);
        }

        self.jpeg.clear();
        JpegEncoder::new_with_quality(&mut self.jpeg, FRAME_JPEG_QUALITY).encode(
            &self.rgb,
            frame.width as u32,
            frame.height as u32,
            ExtendedColorType::Rgb8,
        )?;
        Ok(())
    }

}

/// Parses one reply line into pixel-space hands.
fn parse_reply(line: &str, width: usize, height: usize) -> Result<Vec<Hand>, TrackerError> {
    let reply: Reply = serde_json::from_str(line.trim_end())?;

    let mut hands = Vec::with_capacity(reply.hands.len());
    for hand in reply.hands {
        if hand.points.len() != KEYPOINT_COUNT {
            return Err(TrackerError::MalformedHand {
                count: hand.points.len(),
            });
        }
        let points = hand
            .points
            .iter()
            .enumerate()
            .map(|(id, &(nx, ny))| Keypoint {
                id: id as u8,
                x: (nx * width as f32) as i32,
                y: (ny * height as f32) as i32,
            })
            .collect();
        hands.push(Hand::from_points(points)?);
    }
    Ok(hands)
}

impl LandmarkSource for SidecarTracker {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Vec<Hand>, TrackerError> {
        self.encode_frame(frame)?;

        self.stdin.write_all(&(self.jpeg.len() as u32).to_le_bytes())?;
        self.stdin.write_all(&self.jpeg)?;
        self.stdin.flush()?;

        self.line.clear();
        if self.stdout.read_line(&mut self.line)? == 0 {
            return Err(TrackerError::Eof);
        }

        let hands = parse_reply(&self.line, frame.width, frame.height)?;
        log::trace!("tracker reported {} hand(s)", hands.len());
        Ok(hands)
    }
}

impl Drop for SidecarTracker {
    fn drop(&mut self) {
        if let Err(err) = self.child.kill() {
            log::debug!("tracker process already gone: {err}");
        }
        let _ = self.child.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hand_json() -> String {
        let points: Vec<String> = (0..21).map(|i| format!("[0.{i:02}, 0.5]")).collect();
        format!(r#"{{"hands": [{{"points": [{}]}}]}}"#, points.join(", "))
    }

    #[test]
    fn parse_reply_scales_normalized_coordinates() {
        let hands = parse_reply(&full_hand_json(), 800, 600).unwrap();
        assert_eq!(hands.len(), 1);
        // Point 8 is at (0.08, 0.5) → (64, 300) in an 800x600 frame
        assert_eq!(hands[0].index_tip(), (64, 300));
    }

    #[test]
    fn parse_reply_accepts_empty_hand_list() {
        let hands = parse_reply(r#"{"hands": []}"#, 800, 600).unwrap();
        assert!(hands.is_empty());
        // Field omitted entirely is also an idle frame
        let hands = parse_reply("{}", 800, 600).unwrap();
        assert!(hands.is_empty());
    }

    #[test]
    fn parse_reply_rejects_wrong_point_count() {
        let line = r#"{"hands": [{"points": [[0.1, 0.2], [0.3, 0.4]]}]}"#;
        assert!(matches!(
            parse_reply(line, 800, 600),
            Err(TrackerError::MalformedHand { count: 2 })
        ));
    }

    #[test]
    fn parse_reply_rejects_garbage() {
        assert!(matches!(
            parse_reply("not json at all", 800, 600),
            Err(TrackerError::Protocol(_))
        ));
    }
}
