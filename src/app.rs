//! Application controller: the per-frame wiring.
//!
//! Single-threaded frame loop — the blocking camera read paces everything,
//! so there is no buffering and no backpressure concern. Each frame is
//! processed to completion: capture → mirror → detect → classify → interpret
//! → apply → composite → present.

use anyhow::{Context, Result};
use minifb::{Key, Window, WindowOptions};
use std::time::Instant;

use crate::camera::CameraCapture;
use crate::config::Config;
use crate::draw::canvas::Canvas;
use crate::draw::color;
use crate::draw::primitives::draw_text;
use crate::gesture;
use crate::session::PainterSession;
use crate::tracking::{LandmarkSource, SidecarTracker, fingers};
use crate::ui::{Menu, Palette};

/// Runs the painter until the user closes the window or presses Q/Escape.
pub fn run(config: Config) -> Result<()> {
    let mut camera = CameraCapture::open(&config.camera).context("Failed to open the camera")?;
    let (width, height) = camera.resolution();
    let (width, height) = (width as usize, height as usize);

    let mut tracker =
        SidecarTracker::spawn(&config.tracker).context("Failed to start the landmark tracker")?;

    let mut menu = Menu::from_entries(&config.menu);
    let mut palette = Palette::from_entries(&config.palette, width as i32, height as i32);
    let mut canvas = Canvas::new(width, height);
    let mut session = PainterSession::new(
        config.brush.clone(),
        palette.selected_color(),
        menu.selected_mode(),
    );

    let mut window = Window::new(
        &config.ui.window_title,
        width,
        height,
        WindowOptions::default(),
    )
    .context("Failed to create the display window")?;

    log::info!("Session started ({width}x{height}); press Q or Escape to exit");

    let mut fps_text = String::new();
    let mut frames_this_second = 0u32;
    let mut fps_window_start = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        let mut frame = camera.next_frame().context("Camera read failed")?;

        // Mirror before anything looks at the frame: the display acts like a
        // mirror and the finger classifier requires mirrored coordinates.
        frame.mirror_horizontal();

        let hands = tracker
            .detect(&frame)
            .context("Landmark tracker failed")?;

        menu.draw(&mut frame);
        palette.draw(&mut frame);

        if let Some(primary) = hands.first() {
            let primary_fingers = fingers::classify(primary);
            let secondary = hands.get(1).map(|hand| (hand, fingers::classify(hand)));
            let gesture = gesture::interpret(session.mode(), primary, primary_fingers, secondary);
            log::trace!("gesture: {gesture:?}");
            session.apply(gesture, &mut canvas, &mut frame, &mut menu, &mut palette);
        }

        canvas.composite_onto(&mut frame);

        // HUD: active mode, and the FPS readout refreshed once per second
        let now = Instant::now();
        frames_this_second += 1;
        if now.duration_since(fps_window_start).as_secs_f32() >= 1.0 {
            let secs = now.duration_since(fps_window_start).as_secs_f32();
            fps_text = format!(" | FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            fps_window_start = now;
        }
        let hud = if config.ui.show_fps {
            format!("{}{}", session.mode().label(), fps_text)
        } else {
            session.mode().label().to_string()
        };
        draw_text(&mut frame, 20, height as i32 - 20, &hud, color::HUD_TEXT);

        window
            .update_with_buffer(&frame.pixels, width, height)
            .context("Failed to present frame")?;
    }

    log::info!("Session ended");
    Ok(())
}
