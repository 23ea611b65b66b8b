//! RGB color type, packed-pixel conversions, and predefined color constants.

/// Represents an opaque RGB color with 8-bit components.
///
/// Canvas and preview buffers store pixels as packed `0x00RRGGBB` words, so the
/// color type carries the conversion in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red component (0 = no red, 255 = full red)
    pub r: u8,
    /// Green component (0 = no green, 255 = full green)
    pub g: u8,
    /// Blue component (0 = no blue, 255 = full blue)
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color into a `0x00RRGGBB` pixel word.
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks a `0x00RRGGBB` pixel word into a color.
    pub const fn from_pixel(px: u32) -> Self {
        Self {
            r: ((px >> 16) & 0xFF) as u8,
            g: ((px >> 8) & 0xFF) as u8,
            b: (px & 0xFF) as u8,
        }
    }
}

/// Grayscale value of a packed `0x00RRGGBB` pixel using the standard luma
/// weights (0.299 R + 0.587 G + 0.114 B), computed in integer arithmetic.
///
/// The canvas compositor thresholds on this value, so it must match the
/// conventional grayscale conversion rather than a plain channel average.
pub fn luma(px: u32) -> u8 {
    let r = (px >> 16) & 0xFF;
    let g = (px >> 8) & 0xFF;
    let b = px & 0xFF;
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}

/// Canvas background: unpainted pixels stay all-zero so the compositor lets
/// the live frame through. The eraser paints in this color.
pub const BACKGROUND: Color = Color::new(0, 0, 0);

/// Hold-gesture midpoint indicator.
pub const INDICATOR: Color = Color::new(32, 191, 85);

/// Eraser cursor accent ring.
pub const ERASER_ACCENT: Color = Color::new(232, 153, 220);

/// Pinch measurement connector and tip markers.
pub const PINCH_MARKER: Color = Color::new(245, 66, 66);

/// Pinch preview disc on the steadying hand.
pub const PINCH_PREVIEW: Color = Color::new(66, 176, 245);

/// Menu selection border.
pub const SELECTION: Color = Color::new(0, 159, 253);

/// HUD text.
pub const HUD_TEXT: Color = Color::new(255, 255, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_pack_round_trip() {
        let c = Color::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_pixel(), 0x0012_3456);
        assert_eq!(Color::from_pixel(c.to_pixel()), c);
    }

    #[test]
    fn luma_extremes() {
        assert_eq!(luma(0x000000), 0);
        assert_eq!(luma(0xFFFFFF), 255);
    }

    #[test]
    fn luma_uses_weighted_channels() {
        // Pure green is brighter than pure red, which is brighter than pure blue.
        assert!(luma(0x00FF00) > luma(0xFF0000));
        assert!(luma(0xFF0000) > luma(0x0000FF));
    }
}
