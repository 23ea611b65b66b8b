//! Color palette: a swatch column anchored to the right edge of the frame.

use crate::config::PaletteEntry;
use crate::draw::color::{self, Color};
use crate::draw::primitives::{draw_rect, fill_rect};
use crate::draw::FrameBuffer;
use crate::util::Rect;

/// Horizontal padding between the swatches and the frame edge.
const H_PADDING: i32 = 40;
/// Vertical padding between swatches.
const V_PADDING: i32 = 10;
/// Vertical space reserved below the column (keeps it clear of the bottom).
const V_RESERVED: i32 = 100;
/// Width of the selection highlight ring.
const RING_WIDTH: i32 = 3;

/// One selectable color swatch. Immutable after construction.
pub struct ColorItem {
    /// Color name from the configuration (logging only).
    pub title: String,
    /// The drawing color this swatch selects.
    pub color: Color,
    /// Screen-space hit-box (exclusive bounds).
    pub rect: Rect,
}

/// The color palette: ordered fixed swatches plus a single active selection.
pub struct Palette {
    items: Vec<ColorItem>,
    selected: usize,
}

impl Palette {
    /// Builds the palette from the configuration list, sized to the frame.
    ///
    /// Swatch size is derived from the frame height so the whole column fits
    /// above the reserved bottom region regardless of how many colors are
    /// configured.
    pub fn from_entries(entries: &[PaletteEntry], frame_width: i32, frame_height: i32) -> Self {
        let count = entries.len().max(1) as i32;
        let size = (frame_height - V_PADDING - V_RESERVED) / count - V_PADDING;
        let size = size.max(4);
        let left_x = frame_width - (2 * H_PADDING + size) + H_PADDING;

        let items = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let y = V_PADDING + i as i32 * (size + V_PADDING);
                ColorItem {
                    title: entry.name.clone(),
                    color: Color::new(entry.rgb[0], entry.rgb[1], entry.rgb[2]),
                    rect: Rect::from_origin_size(left_x, y, size, size),
                }
            })
            .collect();

        Self { items, selected: 0 }
    }

    /// The currently selected drawing color.
    pub fn selected_color(&self) -> Color {
        self.items[self.selected].color
    }

    /// Hit-tests the point against all swatches and selects the first hit.
    ///
    /// Returns the (possibly unchanged) selected color, so callers can
    /// unconditionally refresh their brush color from the result.
    pub fn select_if_hit(&mut self, point: (i32, i32)) -> Color {
        if let Some(index) = self
            .items
            .iter()
            .position(|item| item.rect.contains(point.0, point.1))
        {
            if self.selected != index {
                log::info!("Palette: switched to {}", self.items[index].title);
            }
            self.selected = index;
        }
        self.selected_color()
    }

    /// Number of swatches.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the palette has no swatches.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draws all swatches; the active one gets a highlight ring.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        for (i, item) in self.items.iter().enumerate() {
            fill_rect(
                fb,
                item.rect.x1,
                item.rect.y1,
                item.rect.width(),
                item.rect.height(),
                item.color,
            );
            if i == self.selected {
                draw_rect(
                    fb,
                    item.rect.x1 - RING_WIDTH,
                    item.rect.y1 - RING_WIDTH,
                    item.rect.width() + 2 * RING_WIDTH,
                    item.rect.height() + 2 * RING_WIDTH,
                    RING_WIDTH,
                    color::SELECTION,
                );
            }
        }
    }
}
