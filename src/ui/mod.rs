//! On-screen UI models: the mode icon menu and the color palette.

pub mod menu;
pub mod palette;

pub use menu::{Menu, MenuItem};
pub use palette::{ColorItem, Palette};

use serde::{Deserialize, Serialize};

/// The active UI mode, mirrored by the menu's selection.
///
/// A closed enumeration so the gesture interpreter's match is exhaustive:
/// adding a mode is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Draw with the index finger
    Paint,
    /// Adjust brush thickness with a two-hand pinch gesture
    Thickness,
    /// Stamp-erase with three fingers
    Eraser,
    /// Color palette focus
    Color,
    /// Neutral hand mode: gestures move the cursor but nothing paints
    Hand,
}

impl Mode {
    /// Short uppercase label for the HUD.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Paint => "PAINT",
            Mode::Thickness => "THICKNESS",
            Mode::Eraser => "ERASER",
            Mode::Color => "COLOR",
            Mode::Hand => "HAND",
        }
    }
}
