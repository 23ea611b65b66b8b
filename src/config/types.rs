//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::ui::Mode;

/// Camera capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera device index (0 = default webcam)
    #[serde(default = "default_camera_index")]
    pub index: u32,

    /// Requested capture width in pixels
    #[serde(default = "default_camera_width")]
    pub width: u32,

    /// Requested capture height in pixels
    #[serde(default = "default_camera_height")]
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: default_camera_index(),
            width: default_camera_width(),
            height: default_camera_height(),
        }
    }
}

/// Brush and eraser settings.
///
/// The pinch distances define the input range of the two-hand thickness
/// gesture: a thumb–index distance of `min_pinch_distance` pixels (or less)
/// selects `min_thickness`, `max_pinch_distance` (or more) selects
/// `max_thickness`, linear in between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Brush thickness at startup, in pixels
    #[serde(default = "default_brush_thickness")]
    pub default_thickness: u32,

    /// Smallest selectable brush thickness
    #[serde(default = "default_min_thickness")]
    pub min_thickness: u32,

    /// Largest selectable brush thickness
    #[serde(default = "default_max_thickness")]
    pub max_thickness: u32,

    /// Eraser stamp radius in pixels
    #[serde(default = "default_eraser_radius")]
    pub eraser_radius: u32,

    /// Pinch distance mapping to the smallest thickness
    #[serde(default = "default_min_pinch")]
    pub min_pinch_distance: f32,

    /// Pinch distance mapping to the largest thickness
    #[serde(default = "default_max_pinch")]
    pub max_pinch_distance: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            default_thickness: default_brush_thickness(),
            min_thickness: default_min_thickness(),
            max_thickness: default_max_thickness(),
            eraser_radius: default_eraser_radius(),
            min_pinch_distance: default_min_pinch(),
            max_pinch_distance: default_max_pinch(),
        }
    }
}

/// External landmark tracker settings.
///
/// The tracker is a separate process; see `tracking::sidecar` for the wire
/// protocol. The confidence thresholds are forwarded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Command to launch the tracker process
    #[serde(default = "default_tracker_command")]
    pub command: String,

    /// Maximum number of hands to track (the painter uses at most two)
    #[serde(default = "default_max_hands")]
    pub max_hands: u32,

    /// Minimum detection confidence, 0.0 - 1.0
    #[serde(default = "default_detection_confidence")]
    pub min_detection_confidence: f32,

    /// Minimum tracking confidence, 0.0 - 1.0
    #[serde(default = "default_tracking_confidence")]
    pub min_tracking_confidence: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            command: default_tracker_command(),
            max_hands: default_max_hands(),
            min_detection_confidence: default_detection_confidence(),
            min_tracking_confidence: default_tracking_confidence(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the FPS readout in the HUD
    #[serde(default = "default_show_fps")]
    pub show_fps: bool,

    /// Display window title
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_fps: default_show_fps(),
            window_title: default_window_title(),
        }
    }
}

/// One menu item: title, icon asset path, and the mode it activates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    pub icon: String,
    pub mode: Mode,
}

/// One palette color: display name plus RGB components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub rgb: [u8; 3],
}

/// The default icon menu (brush first, so Paint is the initial mode).
pub fn default_menu() -> Vec<MenuEntry> {
    let entry = |title: &str, icon: &str, mode| MenuEntry {
        title: title.to_string(),
        icon: format!("assets/{icon}"),
        mode,
    };
    vec![
        entry("Brush", "brush.png", Mode::Paint),
        entry("Thickness", "thickness.png", Mode::Thickness),
        entry("Palette", "palette.png", Mode::Color),
        entry("Eraser", "eraser.png", Mode::Eraser),
        entry("Hand", "hand.png", Mode::Hand),
    ]
}

/// The default eleven-color palette.
pub fn default_palette() -> Vec<PaletteEntry> {
    let entry = |name: &str, rgb: [u8; 3]| PaletteEntry {
        name: name.to_string(),
        rgb,
    };
    vec![
        entry("Navy", [0, 35, 102]),
        entry("Peach", [250, 128, 114]),
        entry("Blue", [100, 201, 207]),
        entry("Beige", [255, 183, 64]),
        entry("Black", [8, 32, 50]),
        entry("Orange", [255, 76, 41]),
        entry("Purple", [81, 45, 109]),
        entry("Red", [248, 72, 94]),
        entry("Teal", [0, 193, 212]),
        entry("Green", [40, 255, 191]),
        entry("Pink", [240, 143, 192]),
    ]
}

fn default_camera_index() -> u32 {
    0
}

fn default_camera_width() -> u32 {
    800
}

fn default_camera_height() -> u32 {
    600
}

fn default_brush_thickness() -> u32 {
    10
}

fn default_min_thickness() -> u32 {
    1
}

fn default_max_thickness() -> u32 {
    40
}

fn default_eraser_radius() -> u32 {
    40
}

fn default_min_pinch() -> f32 {
    15.0
}

fn default_max_pinch() -> f32 {
    150.0
}

fn default_tracker_command() -> String {
    "fingerpaint-tracker".to_string()
}

fn default_max_hands() -> u32 {
    2
}

fn default_detection_confidence() -> f32 {
    0.7
}

fn default_tracking_confidence() -> f32 {
    0.5
}

fn default_show_fps() -> bool {
    true
}

fn default_window_title() -> String {
    "fingerpaint".to_string()
}
