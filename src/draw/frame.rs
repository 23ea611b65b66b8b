//! Pixel buffer shared by the live frame, the canvas, and the display.

/// A width × height buffer of packed `0x00RRGGBB` pixels.
///
/// The camera decodes into this, the canvas accumulates into one, and the
/// display window presents one. All coordinates are (column, row) with the
/// origin at the top-left.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Row-major pixels, `width * height` entries of `0x00RRGGBB`
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Creates an all-zero (black) buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Returns the pixel at (x, y), or `None` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Mirrors the buffer around its vertical axis, in place.
    ///
    /// The camera feed is mirrored before anything else looks at it, so the
    /// display behaves like a mirror and the finger classifier's left/right
    /// assumptions hold (see [`crate::tracking::fingers`]).
    pub fn mirror_horizontal(&mut self) {
        for row in self.pixels.chunks_exact_mut(self.width) {
            row.reverse();
        }
    }
}
