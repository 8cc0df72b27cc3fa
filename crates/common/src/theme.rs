use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Background style of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Cosmic,
    Forest,
    Sunset,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Cosmic, Theme::Forest, Theme::Sunset];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Cosmic => "cosmic",
            Theme::Forest => "forest",
            Theme::Sunset => "sunset",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Cosmic => "Cosmic Theme",
            Theme::Forest => "Forest Theme",
            Theme::Sunset => "Sunset Theme",
        }
    }

    /// Marker class on the page root. The gradient itself comes from [`Theme::background`].
    pub fn class(self) -> &'static str {
        match self {
            Theme::Cosmic => "theme-cosmic",
            Theme::Forest => "theme-forest",
            Theme::Sunset => "theme-sunset",
        }
    }

    /// Gradient stops, top-left to bottom-right.
    pub fn gradient(self) -> [&'static str; 3] {
        match self {
            // purple-900, indigo-800, blue-900
            Theme::Cosmic => ["#581c87", "#3730a3", "#1e3a8a"],
            // green-900, emerald-800, teal-900
            Theme::Forest => ["#14532d", "#065f46", "#134e4a"],
            // red-900, orange-800, yellow-900
            Theme::Sunset => ["#7f1d1d", "#9a3412", "#713f12"],
        }
    }

    pub fn background(self) -> String {
        let [from, via, to] = self.gradient();
        format!("background-image: linear-gradient(to bottom right, {from}, {via}, {to});")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| ParseError::Theme(s.to_string()))
    }
}
