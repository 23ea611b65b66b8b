//! Library exports for the fingerpaint subsystems.
//!
//! Exposes the gesture pipeline (tracking → gesture → session), the drawing
//! primitives, and the configuration types so the pieces can be exercised
//! without a camera or a tracker process.

pub mod app;
pub mod camera;
pub mod config;
pub mod draw;
pub mod gesture;
pub mod session;
pub mod tracking;
pub mod ui;
pub mod util;

pub use config::Config;
