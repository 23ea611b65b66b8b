//! Configuration file support for fingerpaint.
//!
//! This module handles loading and validating user settings from the
//! configuration file at `~/.config/fingerpaint/config.toml`: camera
//! resolution, brush and eraser parameters, the external tracker command and
//! confidence thresholds, and the menu/palette item lists.
//!
//! If no config file exists, sensible defaults (the reference setup: 800×600,
//! brush 1–40 px, eleven colors) are used automatically.

pub mod types;

pub use types::{
    BrushConfig, CameraConfig, MenuEntry, PaletteEntry, TrackerConfig, UiConfig, default_menu,
    default_palette,
};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [camera]
/// index = 0
/// width = 800
/// height = 600
///
/// [brush]
/// default_thickness = 10
/// max_thickness = 40
///
/// [tracker]
/// command = "fingerpaint-tracker"
/// min_detection_confidence = 0.7
///
/// [[palette]]
/// name = "Red"
/// rgb = [248, 72, 94]
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Camera capture settings
    #[serde(default)]
    pub camera: CameraConfig,

    /// Brush and eraser parameters
    #[serde(default)]
    pub brush: BrushConfig,

    /// External landmark tracker settings
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Ordered menu items (first entry is the startup mode)
    #[serde(default = "default_menu")]
    pub menu: Vec<MenuEntry>,

    /// Ordered palette colors (first entry is the startup color)
    #[serde(default = "default_palette")]
    pub palette: Vec<PaletteEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            brush: BrushConfig::default(),
            tracker: TrackerConfig::default(),
            ui: UiConfig::default(),
            menu: default_menu(),
            palette: default_palette(),
        }
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// User-provided values that would break layout or drawing are clamped to
    /// the nearest valid value with a warning rather than rejected outright.
    fn validate_and_clamp(&mut self) {
        // Resolution: 160x120 - 4096x4096
        if !(160..=4096).contains(&self.camera.width) {
            log::warn!(
                "Invalid camera width {}, clamping to 160-4096 range",
                self.camera.width
            );
            self.camera.width = self.camera.width.clamp(160, 4096);
        }
        if !(120..=4096).contains(&self.camera.height) {
            log::warn!(
                "Invalid camera height {}, clamping to 120-4096 range",
                self.camera.height
            );
            self.camera.height = self.camera.height.clamp(120, 4096);
        }

        // Thickness bounds must be ordered and non-zero
        if self.brush.min_thickness == 0 {
            log::warn!("min_thickness must be at least 1, using 1");
            self.brush.min_thickness = 1;
        }
        if self.brush.max_thickness < self.brush.min_thickness {
            log::warn!(
                "max_thickness {} below min_thickness {}, swapping",
                self.brush.max_thickness,
                self.brush.min_thickness
            );
            std::mem::swap(&mut self.brush.min_thickness, &mut self.brush.max_thickness);
            if self.brush.min_thickness == 0 {
                self.brush.min_thickness = 1;
            }
        }
        if !(self.brush.min_thickness..=self.brush.max_thickness)
            .contains(&self.brush.default_thickness)
        {
            log::warn!(
                "Invalid default_thickness {}, clamping to {}-{} range",
                self.brush.default_thickness,
                self.brush.min_thickness,
                self.brush.max_thickness
            );
            self.brush.default_thickness = self
                .brush
                .default_thickness
                .clamp(self.brush.min_thickness, self.brush.max_thickness);
        }

        // Eraser radius: 1 - 200
        if !(1..=200).contains(&self.brush.eraser_radius) {
            log::warn!(
                "Invalid eraser_radius {}, clamping to 1-200 range",
                self.brush.eraser_radius
            );
            self.brush.eraser_radius = self.brush.eraser_radius.clamp(1, 200);
        }

        // Pinch range must be ordered and positive
        if self.brush.min_pinch_distance < 1.0 {
            log::warn!(
                "Invalid min_pinch_distance {:.1}, using 1.0",
                self.brush.min_pinch_distance
            );
            self.brush.min_pinch_distance = 1.0;
        }
        if self.brush.max_pinch_distance <= self.brush.min_pinch_distance {
            log::warn!(
                "max_pinch_distance {:.1} not above min_pinch_distance {:.1}, using min + 100",
                self.brush.max_pinch_distance,
                self.brush.min_pinch_distance
            );
            self.brush.max_pinch_distance = self.brush.min_pinch_distance + 100.0;
        }

        // Confidence thresholds: 0.0 - 1.0
        if !(0.0..=1.0).contains(&self.tracker.min_detection_confidence) {
            log::warn!(
                "Invalid min_detection_confidence {:.2}, clamping to 0.0-1.0",
                self.tracker.min_detection_confidence
            );
            self.tracker.min_detection_confidence =
                self.tracker.min_detection_confidence.clamp(0.0, 1.0);
        }
        if !(0.0..=1.0).contains(&self.tracker.min_tracking_confidence) {
            log::warn!(
                "Invalid min_tracking_confidence {:.2}, clamping to 0.0-1.0",
                self.tracker.min_tracking_confidence
            );
            self.tracker.min_tracking_confidence =
                self.tracker.min_tracking_confidence.clamp(0.0, 1.0);
        }

        // Max hands: the gesture set uses at most two
        if !(1..=2).contains(&self.tracker.max_hands) {
            log::warn!(
                "Invalid max_hands {}, clamping to 1-2 range",
                self.tracker.max_hands
            );
            self.tracker.max_hands = self.tracker.max_hands.clamp(1, 2);
        }

        // Empty item lists would leave nothing selectable
        if self.menu.is_empty() {
            log::warn!("Empty menu list, using the default menu");
            self.menu = default_menu();
        }
        if self.palette.is_empty() {
            log::warn!("Empty palette list, using the default palette");
            self.palette = default_palette();
        }
    }

    /// Returns the path to the configuration file
    /// (`~/.config/fingerpaint/config.toml`).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("fingerpaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if the
    /// file does not exist. All loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location, creating the
    /// parent directory if needed. Kept for future use (e.g. `--init-config`).
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}
