//! Page bodies drawn below the header.
//!
//! - **Setup** ([`setup`]): threshold and duration sliders
//! - **Monitor** ([`monitor`]): charts, table and status banner
//! - **Help** ([`help`]): sensor integration guide
//!
//! Each page clears its own area before drawing, so switching pages or
//! redrawing after input never leaves stale pixels.

mod help;
mod monitor;
mod setup;

pub use help::draw_help_page;
pub use monitor::draw_monitor_body;
pub use setup::draw_setup_page;
