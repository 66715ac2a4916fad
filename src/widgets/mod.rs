//! Widget components for the compressor dashboard.
//!
//! - [`chart`]: per-quantity time-series chart with threshold line
//! - [`header`]: header bar and monitor page dividers
//! - [`popups`]: session event overlays
//! - [`primitives`]: shared low-level drawing helpers
//! - [`slider`]: setup page slider row
//! - [`table`]: reading table with threshold highlighting
//!
//! Every widget draws onto any `DrawTarget<Color = Rgb565>`, so tests render
//! into a headless `SimulatorDisplay` and inspect pixels. Fixed positions
//! and styles are `const`; dynamic text goes through `heapless::String`.

mod chart;
mod header;
mod popups;
mod primitives;
mod slider;
mod table;

pub use chart::draw_chart;
pub use header::{draw_dividers, draw_header, format_clock, session_status_text};
pub use popups::draw_popup;
pub use primitives::fill_area;
pub use slider::{SLIDER_ROW_HEIGHT, draw_slider};
pub use table::draw_table;
