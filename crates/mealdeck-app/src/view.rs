//! View modes and the panel sets they reveal

use std::fmt;
use std::str::FromStr;

/// Top-level view; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Category grid only
    #[default]
    Home,

    /// Category grid with the about panel and the meal grid.
    /// Used for both category listings and search results.
    Category,

    /// Meal detail panel only
    Details,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Home => "home",
            ViewMode::Category => "category",
            ViewMode::Details => "details",
        }
    }

    /// Parse a mode name, falling back to [`ViewMode::Home`] for unknown names
    pub fn parse_or_home(name: &str) -> Self {
        name.parse().unwrap_or_else(|e: UnknownViewMode| {
            tracing::warn!("{}, using home", e);
            ViewMode::Home
        })
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for mode names that are not one of `home`, `category`, `details`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewMode(pub String);

impl fmt::Display for UnknownViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view mode {:?}", self.0)
    }
}

impl std::error::Error for UnknownViewMode {}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(ViewMode::Home),
            "category" => Ok(ViewMode::Category),
            "details" => Ok(ViewMode::Details),
            _ => Err(UnknownViewMode(s.to_string())),
        }
    }
}

/// Visibility of the four panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Panels {
    pub categories: bool,
    pub about: bool,
    pub meals: bool,
    pub details: bool,
}

impl Panels {
    /// Every panel hidden
    pub fn hidden() -> Self {
        Self::default()
    }

    /// The panel set a mode reveals
    pub fn for_mode(mode: ViewMode) -> Self {
        let mut panels = Self::hidden();
        match mode {
            ViewMode::Home => {
                panels.categories = true;
            }
            ViewMode::Category => {
                panels.categories = true;
                panels.about = true;
                panels.meals = true;
            }
            ViewMode::Details => {
                panels.details = true;
            }
        }
        panels
    }
}
