//! Compressor monitoring dashboard (desktop simulator).
//!
//! Opens an SDL window, shows the setup page and runs monitoring sessions
//! against the simulated compressor. Logging goes through `env_logger`;
//! set `RUST_LOG=debug` to see every recorded reading.
//!
//! # Controls
//!
//! | Page | Key | Action |
//! |------|-----|--------|
//! | Setup | `Up` / `Down` | Select slider |
//! | Setup | `Left` / `Right` | Adjust by 1 |
//! | Setup | `PgDn` / `PgUp` | Adjust by 10 |
//! | Setup | `Enter` | Start monitoring |
//! | Monitor | `R` | Restart session with the same settings |
//! | Monitor | `S` | Discard session, back to setup |
//! | Monitor (stopped) | `Up` / `Down`, `PgUp` / `PgDn` | Scroll the table |
//! | Any | `H` | Toggle help |
//! | Any | `Esc` | Quit |
//!
//! # Frame Loop
//!
//! ```text
//! events ─► App::handle_key ─► App::update(now) ─► App::draw ─► window.update ─► sleep
//! ```
//!
//! Readings are scheduled by the session ticker, not by the frame rate: the
//! loop runs at ~50 FPS and a tick fires whenever its deadline has passed.

use std::thread;
use std::time::Instant;

use anyhow::Context;
use compressor_monitor::{
    app::App,
    colors::BLACK,
    config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE, WINDOW_TITLE},
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Env;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);
    info!("{WINDOW_TITLE} started ({SCREEN_WIDTH}x{SCREEN_HEIGHT} x{WINDOW_SCALE})");

    let mut app = App::new();

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!("Window closed");
                    return Ok(());
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    app.handle_key(keycode, repeat, frame_start)
                        .with_context(|| format!("Cannot start monitoring after {keycode:?}"))?;
                }
                _ => {}
            }
        }
        if app.should_quit() {
            return Ok(());
        }

        let now = Instant::now();
        app.update(now);
        app.draw(&mut display, now);
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
