//! Software rendering: pixel buffers, rasterization primitives, and the
//! persistent canvas with its compositor.
//!
//! - [`Color`]: RGB color with packed-pixel conversions
//! - [`FrameBuffer`]: width × height buffer of `0x00RRGGBB` pixels
//! - [`Canvas`]: the accumulating drawing surface and its matte compositor
//! - [`primitives`]: lines, discs, rectangles, and the 5x7 HUD font

pub mod canvas;
pub mod color;
pub mod frame;
pub mod primitives;

pub use canvas::Canvas;
pub use color::Color;
pub use frame::FrameBuffer;
