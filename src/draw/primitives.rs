//! Software rasterization primitives for the preview frame and the canvas.
//!
//! Everything here writes packed `0x00RRGGBB` pixels into a [`FrameBuffer`];
//! out-of-bounds coordinates are clipped pixel by pixel.

use super::color::Color;
use super::frame::FrameBuffer;

/// Writes one pixel if (x, y) lies inside the buffer.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, px: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = px;
}

/// Draws a 1-pixel Bresenham line between (x0, y0) and (x1, y1).
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let px = color.to_pixel();
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, px);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Fills a disc of the given radius centered at (cx, cy).
///
/// Radius 0 paints the single center pixel.
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: Color) {
    let px = color.to_pixel();
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, cx + dx, cy + dy, px);
            }
        }
    }
}

/// Draws a circle outline (1-pixel ring, midpoint algorithm).
pub fn draw_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: Color) {
    let px = color.to_pixel();
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        for (ox, oy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            put_pixel(fb, cx + ox, cy + oy, px);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Fills an axis-aligned rectangle given its top-left corner and size.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, width: i32, height: i32, color: Color) {
    let px = color.to_pixel();
    for ry in y..y + height {
        for rx in x..x + width {
            put_pixel(fb, rx, ry, px);
        }
    }
}

/// Draws a rectangle outline of the given border width just inside the bounds.
pub fn draw_rect(
    fb: &mut FrameBuffer,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    border: i32,
    color: Color,
) {
    fill_rect(fb, x, y, width, border, color);
    fill_rect(fb, x, y + height - border, width, border, color);
    fill_rect(fb, x, y, border, height, color);
    fill_rect(fb, x + width - border, y, border, height, color);
}

/// Draws a thick line segment as a run of stamped discs.
///
/// The disc radius is half the thickness; the stamp advances one pixel per
/// step along the longer axis, so consecutive discs always overlap and the
/// stroke is gap-free regardless of segment length. Thickness 1 degenerates
/// to single-pixel stamps.
pub fn stroke_segment(
    fb: &mut FrameBuffer,
    from: (i32, i32),
    to: (i32, i32),
    thickness: u32,
    color: Color,
) {
    let radius = (thickness / 2) as i32;
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs());
    if steps == 0 {
        fill_circle(fb, from.0, from.1, radius, color);
        return;
    }
    for i in 0..=steps {
        let x = from.0 + ((to.0 - from.0) * i) / steps;
        let y = from.1 + ((to.1 - from.1) * i) / steps;
        fill_circle(fb, x, y, radius, color);
    }
}

// ---------------------------------------------------------------------------
// 5x7 bitmap font for the HUD (mode name + FPS readout)
// ---------------------------------------------------------------------------

/// Returns the 5x7 glyph bitmap for a character, row-major, low 5 bits used
/// (bit 4 = leftmost pixel). Unknown characters render as blank.
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g {
        ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
            Some([$a, $b, $c, $d, $e, $f, $g])
        };
    }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110),
        '1' => g!(0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        '2' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111),
        '3' => g!(0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110),
        '4' => g!(0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010),
        '5' => g!(0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110),
        '6' => g!(0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110),
        '7' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000),
        '8' => g!(0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110),
        '9' => g!(0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100),

        'A' => g!(0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'B' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110),
        'C' => g!(0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110),
        'D' => g!(0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100),
        'E' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111),
        'F' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000),
        'G' => g!(0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111),
        'H' => g!(0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'I' => g!(0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        'J' => g!(0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100),
        'K' => g!(0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001),
        'L' => g!(0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111),
        'M' => g!(0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001),
        'N' => g!(0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001),
        'O' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'P' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000),
        'Q' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101),
        'R' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001),
        'S' => g!(0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110),
        'T' => g!(0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        'U' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'V' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100),
        'W' => g!(0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001),
        'X' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001),
        'Y' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100),
        'Z' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111),

        ' ' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000),
        '|' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        ':' => g!(0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000),
        '.' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000),
        '-' => g!(0b00000, 0b00000, 0b00000, 0b01110, 0b00000, 0b00000, 0b00000),

        _ => None,
    }
}

fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, px: u32) {
    let Some(rows) = glyph5x7(ch) else { return };

    // Shadow pass first, offset (1,1), for contrast over the video
    for (ry, rowbits) in rows.iter().enumerate() {
        for rx in 0..5i32 {
            if rowbits & (1u8 << (4 - rx)) != 0 {
                put_pixel(fb, x + rx + 1, y + ry as i32 + 1, 0);
            }
        }
    }
    for (ry, rowbits) in rows.iter().enumerate() {
        for rx in 0..5i32 {
            if rowbits & (1u8 << (4 - rx)) != 0 {
                put_pixel(fb, x + rx, y + ry as i32, px);
            }
        }
    }
}

/// Draws a text string in 5x7 glyphs with 1-pixel spacing.
pub fn draw_text(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: Color) {
    let px = color.to_pixel();
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, px);
        x += 6;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::new(255, 255, 255);

    #[test]
    fn put_pixel_clips_out_of_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        put_pixel(&mut fb, -1, 0, 0xFF);
        put_pixel(&mut fb, 0, -1, 0xFF);
        put_pixel(&mut fb, 4, 0, 0xFF);
        put_pixel(&mut fb, 0, 4, 0xFF);
        assert!(fb.pixels.iter().all(|&px| px == 0));
    }

    #[test]
    fn fill_circle_radius_zero_is_one_pixel() {
        let mut fb = FrameBuffer::new(5, 5);
        fill_circle(&mut fb, 2, 2, 0, WHITE);
        assert_eq!(fb.pixels.iter().filter(|&&px| px != 0).count(), 1);
        assert_eq!(fb.get(2, 2), Some(WHITE.to_pixel()));
    }

    #[test]
    fn stroke_segment_horizontal_is_gap_free() {
        let mut fb = FrameBuffer::new(60, 10);
        stroke_segment(&mut fb, (5, 5), (50, 5), 1, WHITE);
        for x in 5..=50 {
            assert_eq!(fb.get(x, 5), Some(WHITE.to_pixel()), "gap at x={x}");
        }
    }

    #[test]
    fn stroke_segment_diagonal_is_connected() {
        let mut fb = FrameBuffer::new(40, 40);
        stroke_segment(&mut fb, (2, 3), (30, 25), 3, WHITE);
        // Every step along the longer axis leaves at least one painted pixel
        // in its column, so the stroke has no holes.
        for x in 2..=30 {
            let painted = (0..40).any(|y| fb.get(x, y) == Some(WHITE.to_pixel()));
            assert!(painted, "no painted pixel in column {x}");
        }
    }

    #[test]
    fn draw_text_renders_known_glyphs() {
        let mut fb = FrameBuffer::new(40, 10);
        draw_text(&mut fb, 0, 0, "FPS", WHITE);
        assert!(fb.pixels.iter().any(|&px| px == WHITE.to_pixel()));
    }
}
