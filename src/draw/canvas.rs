//! Persistent drawing canvas and the canvas-over-live compositor.

use super::color::{self, Color};
use super::frame::FrameBuffer;
use super::primitives::{fill_circle, stroke_segment};

/// The accumulating drawing surface.
///
/// Same dimensions as the video frame, initialized to all-zero, and never
/// cleared automatically: strokes pile up until the eraser removes them.
/// The compositor treats zero (and any sufficiently dark) pixels as "let the
/// live frame through".
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: FrameBuffer,
}

impl Canvas {
    /// Creates an empty canvas matching the frame dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: FrameBuffer::new(width, height),
        }
    }

    /// Read access to the underlying buffer (tests, compositing).
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Paints a thick line segment onto the canvas.
    pub fn stroke(&mut self, from: (i32, i32), to: (i32, i32), thickness: u32, color: Color) {
        stroke_segment(&mut self.buffer, from, to, thickness, color);
    }

    /// Stamps a filled disc onto the canvas (the eraser paints background
    /// color with this).
    pub fn stamp(&mut self, center: (i32, i32), radius: i32, color: Color) {
        fill_circle(&mut self.buffer, center.0, center.1, radius, color);
    }

    /// Merges the canvas over a live frame, in place.
    ///
    /// Chroma-key style matte, recomputed every frame:
    /// 1. canvas pixel → grayscale (luma)
    /// 2. inverse binary threshold at 127: ≤ 127 keeps the live pixel,
    ///    > 127 zeroes it
    /// 3. the (possibly zeroed) live pixel is ORed with the raw canvas pixel
    ///
    /// Net effect: bright canvas pixels win outright; elsewhere the live
    /// pixel passes through, bitwise-ORed with whatever dark paint the canvas
    /// holds there. Unpainted (zero) canvas pixels leave the live frame
    /// untouched.
    pub fn composite_onto(&self, live: &mut FrameBuffer) {
        debug_assert_eq!(live.width, self.buffer.width);
        debug_assert_eq!(live.height, self.buffer.height);

        for (out, &ink) in live.pixels.iter_mut().zip(self.buffer.pixels.iter()) {
            if color::luma(ink) > 127 {
                *out = ink;
            } else {
                *out |= ink;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::new(255, 255, 255);
    const LIVE_PX: u32 = 0x0030_6090;

    fn live_frame(width: usize, height: usize) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        fb.pixels.fill(LIVE_PX);
        fb
    }

    #[test]
    fn empty_canvas_passes_live_through_unchanged() {
        let canvas = Canvas::new(8, 8);
        let mut live = live_frame(8, 8);
        canvas.composite_onto(&mut live);
        assert!(live.pixels.iter().all(|&px| px == LIVE_PX));
    }

    #[test]
    fn bright_paint_wins_over_live() {
        let mut canvas = Canvas::new(8, 8);
        canvas.stamp((4, 4), 1, WHITE);
        let mut live = live_frame(8, 8);
        canvas.composite_onto(&mut live);
        assert_eq!(live.get(4, 4), Some(WHITE.to_pixel()));
        // Far corner untouched
        assert_eq!(live.get(0, 0), Some(LIVE_PX));
    }

    #[test]
    fn dark_paint_is_ored_with_live() {
        // Dark navy: luma well below the threshold, so the matte keeps the
        // live pixel and ORs the paint in.
        let navy = Color::new(0, 35, 102);
        let mut canvas = Canvas::new(8, 8);
        canvas.stamp((4, 4), 0, navy);
        let mut live = live_frame(8, 8);
        canvas.composite_onto(&mut live);
        assert_eq!(live.get(4, 4), Some(LIVE_PX | navy.to_pixel()));
    }

    #[test]
    fn erase_then_composite_restores_live_pixel() {
        let mut canvas = Canvas::new(16, 16);
        canvas.stamp((8, 8), 3, WHITE);

        // Eraser stamp in background color over the painted area
        canvas.stamp((8, 8), 5, color::BACKGROUND);

        let mut live = live_frame(16, 16);
        canvas.composite_onto(&mut live);
        assert_eq!(live.get(8, 8), Some(LIVE_PX));
        assert!(live.pixels.iter().all(|&px| px == LIVE_PX));
    }

    #[test]
    fn horizontal_stroke_composites_as_connected_segment() {
        let mut canvas = Canvas::new(200, 120);
        canvas.stroke((100, 100), (150, 100), 10, WHITE);

        let mut live = live_frame(200, 120);
        canvas.composite_onto(&mut live);

        // The segment itself, end to end
        for x in 100..=150 {
            assert_eq!(live.get(x, 100), Some(WHITE.to_pixel()), "gap at x={x}");
        }
        // Elsewhere unchanged (well clear of the stroke's thickness)
        assert_eq!(live.get(50, 20), Some(LIVE_PX));
        assert_eq!(live.get(180, 110), Some(LIVE_PX));
    }
}
