//! Painter session state machine.
//!
//! [`PainterSession`] owns the mutable per-session drawing state — brush
//! thickness, drawing color, active mode, and the last pen position — and
//! applies one interpreted [`Gesture`] per frame to the canvas, the preview
//! frame, and the UI models. It replaces what would otherwise be a pile of
//! loose globals with a single-writer struct threaded through the controller
//! loop.

use crate::config::BrushConfig;
use crate::draw::canvas::Canvas;
use crate::draw::color::{self, Color};
use crate::draw::primitives::{draw_circle, draw_line, fill_circle};
use crate::draw::FrameBuffer;
use crate::gesture::Gesture;
use crate::ui::{Menu, Mode, Palette};
use crate::util;

/// Radius of the hold-gesture midpoint indicator.
const HOLD_INDICATOR_RADIUS: i32 = 20;
/// Radius of the pinch tip markers.
const PINCH_MARKER_RADIUS: i32 = 5;

/// Process-lifetime drawing state for one session.
pub struct PainterSession {
    thickness: u32,
    color: Color,
    mode: Mode,
    /// End of the stroke in progress. `None` whenever the drawing gesture has
    /// been interrupted; the next draw frame then starts a fresh stroke
    /// instead of connecting to a stale point.
    last_pen: Option<(i32, i32)>,
    brush: BrushConfig,
}

impl PainterSession {
    /// Creates a session with the configured brush defaults, the palette's
    /// current color, and the menu's current mode.
    pub fn new(brush: BrushConfig, initial_color: Color, initial_mode: Mode) -> Self {
        let thickness = brush
            .default_thickness
            .clamp(brush.min_thickness, brush.max_thickness);
        Self {
            thickness,
            color: initial_color,
            mode: initial_mode,
            last_pen: None,
            brush,
        }
    }

    /// Current brush thickness in pixels.
    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    /// Current drawing color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current active mode (mirrors the menu selection).
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last pen position, if a stroke is in progress.
    pub fn last_pen(&self) -> Option<(i32, i32)> {
        self.last_pen
    }

    /// Applies one frame's gesture.
    ///
    /// Mutates the canvas for Draw and Erase, the UI selections for Hold, and
    /// only session-local state for AdjustThickness. Idle mutates nothing at
    /// all: in particular the last pen position survives detection dropouts,
    /// so a briefly lost hand does not split a stroke. Only Hold and Erase
    /// entry reset it.
    pub fn apply(
        &mut self,
        gesture: Gesture,
        canvas: &mut Canvas,
        preview: &mut FrameBuffer,
        menu: &mut Menu,
        palette: &mut Palette,
    ) {
        match gesture {
            Gesture::Idle => {}

            Gesture::Draw { at } => {
                let from = self.last_pen.unwrap_or(at);
                canvas.stroke(from, at, self.thickness, self.color);

                // Preview shows the same segment plus a brush cursor.
                crate::draw::primitives::stroke_segment(
                    preview,
                    from,
                    at,
                    self.thickness,
                    self.color,
                );
                fill_circle(preview, at.0, at.1, self.thickness as i32, self.color);

                self.last_pen = Some(at);
            }

            Gesture::Erase { at } => {
                // A fresh eraser entry must not leave a stale stroke anchor.
                if self.last_pen.is_none() {
                    self.last_pen = Some(at);
                }
                let radius = self.brush.eraser_radius as i32;
                canvas.stamp(at, radius, color::BACKGROUND);
                fill_circle(preview, at.0, at.1, radius, color::BACKGROUND);
                draw_circle(preview, at.0, at.1, radius, color::ERASER_ACCENT);
            }

            Gesture::Hold { indicator, probe } => {
                self.last_pen = None;

                // Palette hit-test runs before the menu.
                self.color = palette.select_if_hit(probe);
                if menu.select_if_hit(probe).is_some() {
                    let mode = menu.selected_mode();
                    if mode != self.mode {
                        log::info!("Mode: {:?} -> {:?}", self.mode, mode);
                    }
                    self.mode = mode;
                }

                fill_circle(
                    preview,
                    indicator.0,
                    indicator.1,
                    HOLD_INDICATOR_RADIUS,
                    color::INDICATOR,
                );
            }

            Gesture::AdjustThickness {
                distance,
                thumb,
                index,
                preview: preview_at,
            } => {
                let mapped = util::map_range(
                    distance,
                    self.brush.min_pinch_distance,
                    self.brush.max_pinch_distance,
                    self.brush.min_thickness as f32,
                    self.brush.max_thickness as f32,
                );
                self.thickness = (mapped.round() as u32)
                    .clamp(self.brush.min_thickness, self.brush.max_thickness);
                log::debug!("Brush thickness adjusted to {}px", self.thickness);

                // Measurement feedback: connector, tip markers, midpoint dot,
                // and a true-size preview disc on the steadying hand.
                draw_line(
                    preview,
                    thumb.0,
                    thumb.1,
                    index.0,
                    index.1,
                    color::PINCH_MARKER,
                );
                fill_circle(
                    preview,
                    thumb.0,
                    thumb.1,
                    PINCH_MARKER_RADIUS,
                    color::PINCH_MARKER,
                );
                fill_circle(
                    preview,
                    index.0,
                    index.1,
                    PINCH_MARKER_RADIUS,
                    color::PINCH_MARKER,
                );
                fill_circle(
                    preview,
                    (thumb.0 + index.0) / 2,
                    (thumb.1 + index.1) / 2,
                    PINCH_MARKER_RADIUS,
                    color::PINCH_PREVIEW,
                );
                fill_circle(
                    preview,
                    preview_at.0,
                    preview_at.1,
                    self.thickness as i32,
                    color::PINCH_PREVIEW,
                );
            }
        }
    }
}
