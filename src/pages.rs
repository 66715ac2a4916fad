//! Page navigation.
//!
//! # Pages
//!
//! - [`Page::Setup`]: threshold sliders and run duration (`Enter` starts monitoring)
//! - [`Page::Monitor`]: header, three charts and the reading table
//! - [`Page::Help`]: sensor integration guide (`H` toggles it from any page)

/// Available pages in the application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Setup form. Shown at startup.
    #[default]
    Setup,

    /// Live charts and table for the current session.
    Monitor,

    /// Static help text.
    Help,
}

impl Page {
    /// Toggle the help page.
    ///
    /// Leaving help returns to `back`, the page help was opened from.
    #[inline]
    pub const fn toggle_help(
        self,
        back: Self,
    ) -> Self {
        match self {
            Self::Help => back,
            Self::Setup | Self::Monitor => Self::Help,
        }
    }

    /// Short name for the header and log messages.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Setup => "SETUP",
            Self::Monitor => "MONITOR",
            Self::Help => "HELP",
        }
    }
}
