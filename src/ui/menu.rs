//! Mode icon menu: fixed tile row at the top-left with a single selection.

use image::RgbaImage;
use image::imageops::FilterType;

use super::Mode;
use crate::config::MenuEntry;
use crate::draw::color::{self, Color};
use crate::draw::primitives::{draw_rect, draw_text, fill_rect};
use crate::draw::FrameBuffer;
use crate::util::Rect;

/// Side length of a menu tile in pixels.
const TILE_SIZE: i32 = 48;
/// Gap between tiles and from the screen edges.
const TILE_MARGIN: i32 = 10;
/// Width of the selection border.
const BORDER_WIDTH: i32 = 3;
/// Fallback tile background when an icon asset is unavailable.
const TILE_FALLBACK: Color = Color::new(60, 60, 60);

/// One selectable mode icon. Immutable after construction.
pub struct MenuItem {
    /// Display title; its first character doubles as the fallback glyph.
    pub title: String,
    /// Mode this item activates.
    pub mode: Mode,
    /// Screen-space hit-box (exclusive bounds).
    pub rect: Rect,
    icon: Option<RgbaImage>,
}

/// The icon menu: an ordered, fixed set of [`MenuItem`]s plus exactly one
/// active selection. The selected index is always in range.
pub struct Menu {
    items: Vec<MenuItem>,
    selected: usize,
}

impl Menu {
    /// Builds the menu from the startup configuration list.
    ///
    /// Tiles are laid out left to right along the top edge. Icon assets that
    /// fail to load degrade to a flat tile with the title's initial; that is
    /// a cosmetic warning, not an error.
    pub fn from_entries(entries: &[MenuEntry]) -> Self {
        let items = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let x = TILE_MARGIN + i as i32 * (TILE_SIZE + TILE_MARGIN);
                let icon = load_icon(&entry.icon, &entry.title);
                MenuItem {
                    title: entry.title.clone(),
                    mode: entry.mode,
                    rect: Rect::from_origin_size(x, TILE_MARGIN, TILE_SIZE, TILE_SIZE),
                    icon,
                }
            })
            .collect();

        Self { items, selected: 0 }
    }

    /// Returns the index of the item strictly containing the point, if any.
    ///
    /// Linear scan, first match; boxes are non-overlapping by construction
    /// so the order is immaterial. Boundary points hit nothing.
    pub fn hit_test(&self, point: (i32, i32)) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.rect.contains(point.0, point.1))
    }

    /// Makes the item at `index` the active selection.
    ///
    /// An out-of-range index is a precondition violation by the caller, not a
    /// recoverable condition.
    pub fn select(&mut self, index: usize) {
        assert!(index < self.items.len(), "menu index out of range");
        if self.selected != index {
            log::info!("Menu: switched to {}", self.items[index].title);
        }
        self.selected = index;
    }

    /// Selects the first item carrying the given mode, if one exists.
    pub fn select_by_mode(&mut self, mode: Mode) {
        if let Some(index) = self.items.iter().position(|item| item.mode == mode) {
            self.select(index);
        }
    }

    /// Hit-tests and selects in one step, returning the newly active mode
    /// when the point landed on an item.
    pub fn select_if_hit(&mut self, point: (i32, i32)) -> Option<Mode> {
        let index = self.hit_test(point)?;
        self.select(index);
        Some(self.items[index].mode)
    }

    /// Currently selected item index.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Mode of the currently selected item.
    pub fn selected_mode(&self) -> Mode {
        self.items[self.selected].mode
    }

    /// Title of the currently selected item (HUD).
    pub fn selected_title(&self) -> &str {
        &self.items[self.selected].title
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draws all tiles and the active selection border onto the frame.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        for (i, item) in self.items.iter().enumerate() {
            match &item.icon {
                Some(icon) => blit_icon(fb, icon, item.rect.x1, item.rect.y1),
                None => {
                    fill_rect(
                        fb,
                        item.rect.x1,
                        item.rect.y1,
                        TILE_SIZE,
                        TILE_SIZE,
                        TILE_FALLBACK,
                    );
                    let glyph = item.title.chars().next().unwrap_or('?');
                    draw_text(
                        fb,
                        item.rect.x1 + TILE_SIZE / 2 - 3,
                        item.rect.y1 + TILE_SIZE / 2 - 4,
                        &glyph.to_string(),
                        color::HUD_TEXT,
                    );
                }
            }

            if i == self.selected {
                draw_rect(
                    fb,
                    item.rect.x1 - BORDER_WIDTH,
                    item.rect.y1 - BORDER_WIDTH,
                    TILE_SIZE + 2 * BORDER_WIDTH,
                    TILE_SIZE + 2 * BORDER_WIDTH,
                    BORDER_WIDTH,
                    color::SELECTION,
                );
            }
        }
    }
}

fn load_icon(path: &str, title: &str) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(img) => Some(image::imageops::resize(
            &img.to_rgba8(),
            TILE_SIZE as u32,
            TILE_SIZE as u32,
            FilterType::Triangle,
        )),
        Err(err) => {
            log::warn!("Could not load icon '{path}' for menu item '{title}': {err}");
            None
        }
    }
}

/// Alpha-composites an icon onto the frame at (x, y).
fn blit_icon(fb: &mut FrameBuffer, icon: &RgbaImage, x: i32, y: i32) {
    for (ix, iy, px) in icon.enumerate_pixels() {
        let (fx, fy) = (x + ix as i32, y + iy as i32);
        if fx < 0 || fy < 0 || fx as usize >= fb.width || fy as usize >= fb.height {
            continue;
        }
        let [r, g, b, a] = px.0;
        let idx = fy as usize * fb.width + fx as usize;
        let under = fb.pixels[idx];
        let (ur, ug, ub) = (
            (under >> 16) & 0xFF,
            (under >> 8) & 0xFF,
            under & 0xFF,
        );
        let a = a as u32;
        let blend = |over: u8, under: u32| (over as u32 * a + under * (255 - a)) / 255;
        fb.pixels[idx] = (blend(r, ur) << 16) | (blend(g, ug) << 8) | blend(b, ub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_menu() -> Menu {
        let entries = vec![
            MenuEntry {
                title: "Brush".into(),
                icon: "does-not-exist/brush.png".into(),
                mode: Mode::Paint,
            },
            MenuEntry {
                title: "Eraser".into(),
                icon: "does-not-exist/eraser.png".into(),
                mode: Mode::Eraser,
            },
            MenuEntry {
                title: "Hand".into(),
                icon: "does-not-exist/hand.png".into(),
                mode: Mode::Hand,
            },
        ];
        Menu::from_entries(&entries)
    }

    #[test]
    fn layout_places_tiles_left_to_right() {
        let menu = test_menu();
        assert_eq!(menu.items[0].rect, Rect::from_origin_size(10, 10, 48, 48));
        assert_eq!(menu.items[1].rect, Rect::from_origin_size(68, 10, 48, 48));
        assert_eq!(menu.items[2].rect, Rect::from_origin_size(126, 10, 48, 48));
    }

    #[test]
    fn hit_test_strictly_inside_selects() {
        let mut menu = test_menu();
        assert_eq!(menu.hit_test((70, 20)), Some(1));
        assert_eq!(menu.select_if_hit((70, 20)), Some(Mode::Eraser));
        assert_eq!(menu.selected_index(), 1);
    }

    #[test]
    fn hit_test_boundary_misses() {
        let menu = test_menu();
        // Exactly on the left edge of item 0 and the top edge of item 1
        assert_eq!(menu.hit_test((10, 30)), None);
        assert_eq!(menu.hit_test((70, 10)), None);
        // In the margin between items 0 and 1
        assert_eq!(menu.hit_test((60, 30)), None);
    }

    #[test]
    fn exactly_one_selection_at_a_time() {
        let mut menu = test_menu();
        assert_eq!(menu.selected_index(), 0);
        menu.select_by_mode(Mode::Hand);
        assert_eq!(menu.selected_index(), 2);
        assert_eq!(menu.selected_mode(), Mode::Hand);
        menu.select(0);
        assert_eq!(menu.selected_mode(), Mode::Paint);
    }

    #[test]
    #[should_panic(expected = "menu index out of range")]
    fn select_out_of_range_panics() {
        let mut menu = test_menu();
        menu.select(99);
    }

    #[test]
    fn missing_icons_fall_back_and_still_draw() {
        let menu = test_menu();
        let mut fb = FrameBuffer::new(200, 80);
        menu.draw(&mut fb);
        // Fallback tiles plus the selection border leave visible pixels
        assert!(fb.pixels.iter().any(|&px| px != 0));
    }
}
