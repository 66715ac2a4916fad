// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // usize/u32->f32 in chart scaling
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for screen coordinates
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::struct_excessive_bools)] // RenderState uses bools appropriately
#![allow(clippy::similar_names)] // lo/hi, x0/x1 in chart math are clear

//! Compressor monitoring dashboard.
//!
//! Simulated pressure, temperature and vibration readings arrive every
//! three seconds for a user-chosen run budget. Each reading is appended to
//! a session table, plotted on one chart per quantity against its threshold
//! and shown in a table where values above threshold are highlighted.
//!
//! The crate is split so everything but the window loop is testable
//! headless:
//!
//! - [`monitor`], [`session`], [`ticker`]: session state machine, table and
//!   fixed-rate scheduling, all driven by explicit `Instant`s
//! - [`reading`]: the [`ReadingSource`](reading::ReadingSource) seam and the
//!   random simulator behind it
//! - [`controls`], [`thresholds`]: setup form values and limits
//! - [`widgets`], [`screens`]: drawing onto any `DrawTarget<Color = Rgb565>`
//! - [`app`]: ties input, update and drawing together for `main`

pub mod app;
pub mod colors;
pub mod config;
pub mod controls;
pub mod error;
pub mod input;
pub mod monitor;
pub mod pages;
pub mod reading;
pub mod render;
pub mod screens;
pub mod session;
pub mod styles;
pub mod thresholds;
pub mod ticker;
pub mod widgets;
