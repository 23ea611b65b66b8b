//! Utility functions for geometry and value mapping.
//!
//! This module provides:
//! - Axis-aligned rectangles with exclusive-bounds hit-testing
//! - Linear range mapping with clamping (pinch distance → brush thickness)
//! - Euclidean distance between pixel points

/// Axis-aligned rectangle in screen space.
///
/// Used for menu item and palette swatch hit-boxes. Containment is tested with
/// *exclusive* bounds: a point exactly on an edge is outside, so adjacent
/// boxes can never both claim a shared boundary pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge X coordinate
    pub x1: i32,
    /// Top edge Y coordinate
    pub y1: i32,
    /// Right edge X coordinate
    pub x2: i32,
    /// Bottom edge Y coordinate
    pub y2: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Returns true if the point lies strictly inside the rectangle.
    ///
    /// Boundary points are *not* contained (open interval on all four edges).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x1 < x && x < self.x2 && self.y1 < y && y < self.y2
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}

/// Linearly maps `value` from `[in_min, in_max]` to `[out_min, out_max]`,
/// clamping at both ends.
///
/// Inputs at or below `in_min` map to `out_min`; inputs at or beyond `in_max`
/// map to `out_max`; values in between interpolate linearly. The mapping is
/// monotonic for `in_min < in_max`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if value <= in_min {
        return out_min;
    }
    if value >= in_max {
        return out_max;
    }
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Euclidean distance between two pixel points.
pub fn distance(a: (i32, i32), b: (i32, i32)) -> f32 {
    let dx = (a.0 - b.0) as f32;
    let dy = (a.1 - b.1) as f32;
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_exclusive_on_all_edges() {
        let r = Rect::from_origin_size(10, 10, 20, 20);

        // Strictly inside
        assert!(r.contains(11, 11));
        assert!(r.contains(29, 29));

        // Exactly on each edge: outside
        assert!(!r.contains(10, 15)); // left
        assert!(!r.contains(30, 15)); // right
        assert!(!r.contains(15, 10)); // top
        assert!(!r.contains(15, 30)); // bottom

        // Corners
        assert!(!r.contains(10, 10));
        assert!(!r.contains(30, 30));
    }

    #[test]
    fn map_range_clamps_below_and_above() {
        assert_eq!(map_range(0.0, 15.0, 150.0, 1.0, 40.0), 1.0);
        assert_eq!(map_range(15.0, 15.0, 150.0, 1.0, 40.0), 1.0);
        assert_eq!(map_range(150.0, 15.0, 150.0, 1.0, 40.0), 40.0);
        assert_eq!(map_range(500.0, 15.0, 150.0, 1.0, 40.0), 40.0);
    }

    #[test]
    fn map_range_is_linear_and_monotonic_between() {
        let mid = map_range(82.5, 15.0, 150.0, 1.0, 40.0);
        assert!((mid - 20.5).abs() < 1e-4);

        let mut prev = f32::MIN;
        for step in 0..=100 {
            let v = step as f32 * 1.6;
            let mapped = map_range(v, 15.0, 150.0, 1.0, 40.0);
            assert!(mapped >= prev);
            prev = mapped;
        }
    }

    #[test]
    fn distance_matches_pythagoras() {
        assert_eq!(distance((0, 0), (3, 4)), 5.0);
        assert_eq!(distance((10, 10), (10, 10)), 0.0);
    }
}
