//! Webcam capture via nokhwa.
//!
//! A thin wrapper that opens the configured device and yields decoded
//! [`FrameBuffer`]s. Capture failures are fatal to the frame loop: there is
//! no reconnect or degraded mode, the blocking per-frame read is also the
//! loop's pacing mechanism.

use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution},
};
use thiserror::Error;

use crate::config::CameraConfig;
use crate::draw::FrameBuffer;

/// Target capture frame rate. The device may negotiate something close.
const TARGET_FPS: u32 = 30;

/// Errors from camera setup and capture.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("failed to open camera {index}: {message}")]
    Open { index: u32, message: String },

    #[error("failed to start camera stream: {0}")]
    Stream(String),

    #[error("failed to read camera frame: {0}")]
    Frame(String),

    #[error("failed to decode camera frame: {0}")]
    Decode(String),
}

/// An open, streaming camera.
pub struct CameraCapture {
    camera: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Opens the configured device and starts streaming.
    ///
    /// The requested resolution is a preference; the device may deliver the
    /// closest format it supports, and [`resolution`](Self::resolution)
    /// reports what was actually negotiated.
    pub fn open(config: &CameraConfig) -> Result<Self, CameraError> {
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(
                Resolution::new(config.width, config.height),
                FrameFormat::YUYV,
                TARGET_FPS,
            ),
        ));

        let mut camera =
            Camera::new(CameraIndex::Index(config.index), requested).map_err(|e| {
                CameraError::Open {
                    index: config.index,
                    message: e.to_string(),
                }
            })?;

        camera
            .open_stream()
            .map_err(|e| CameraError::Stream(e.to_string()))?;

        let actual = camera.resolution();
        if actual.width() != config.width || actual.height() != config.height {
            log::warn!(
                "Camera negotiated {}x{} instead of the requested {}x{}",
                actual.width(),
                actual.height(),
                config.width,
                config.height
            );
        }
        log::info!(
            "Camera {} streaming at {}x{}",
            config.index,
            actual.width(),
            actual.height()
        );

        Ok(Self {
            camera,
            width: actual.width(),
            height: actual.height(),
        })
    }

    /// Blocks until the next frame and decodes it into packed pixels.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, CameraError> {
        let frame = self
            .camera
            .frame()
            .map_err(|e| CameraError::Frame(e.to_string()))?;

        let rgb = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::Decode(e.to_string()))?;

        let (width, height) = rgb.dimensions();
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for px in rgb.pixels() {
            let [r, g, b] = px.0;
            pixels.push(((r as u32) << 16) | ((g as u32) << 8) | b as u32);
        }

        Ok(FrameBuffer {
            width: width as usize,
            height: height as usize,
            pixels,
        })
    }

    /// The negotiated capture resolution.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
