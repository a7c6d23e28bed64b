//! Theme provider for Recetario
//!
//! Exactly two themes exist: Light and Dark, each a fixed palette shaped
//! after the Material Design 3 baseline color schemes. The app starts in
//! Light and the only transition is the toggle; the selection is not
//! persisted across restarts.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// A color represented as an RGB hex string (e.g., "#FFFBFE")
pub type Color = String;

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Whether this is the dark theme
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeName::Dark)
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Color palette for one theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    /// Main background color
    pub background: Color,
    /// Surface color (cards, sheets)
    pub surface: Color,
    /// Variant surface color (list separators, chips)
    pub surface_variant: Color,
    /// Primary accent color
    pub primary: Color,
    /// Text/icon color on primary
    pub on_primary: Color,
    /// Text color on the background
    pub on_background: Color,
    /// Text color on surfaces
    pub on_surface: Color,
    /// Muted text color on variant surfaces
    pub on_surface_variant: Color,
    /// Outline/border color
    pub outline: Color,
    /// Error color
    pub error: Color,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color palette
    pub palette: ThemePalette,
}

impl Theme {
    /// Whether this is the dark theme
    pub fn is_dark(&self) -> bool {
        self.name.is_dark()
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        palette: ThemePalette {
            background: "#FFFBFE".to_string(),
            surface: "#FFFBFE".to_string(),
            surface_variant: "#E7E0EC".to_string(),
            primary: "#6750A4".to_string(),
            on_primary: "#FFFFFF".to_string(),
            on_background: "#1C1B1F".to_string(),
            on_surface: "#1C1B1F".to_string(),
            on_surface_variant: "#49454F".to_string(),
            outline: "#79747E".to_string(),
            error: "#B3261E".to_string(),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        palette: ThemePalette {
            background: "#1C1B1F".to_string(),
            surface: "#1C1B1F".to_string(),
            surface_variant: "#49454F".to_string(),
            primary: "#D0BCFF".to_string(),
            on_primary: "#381E72".to_string(),
            on_background: "#E6E1E5".to_string(),
            on_surface: "#E6E1E5".to_string(),
            on_surface_variant: "#CAC4D0".to_string(),
            outline: "#938F99".to_string(),
            error: "#F2B8B5".to_string(),
        },
    }
}

/// Get a theme by name
pub fn theme_for(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// Shared theme selection for the whole screen tree
///
/// The derived theme is regenerated inside the toggle's critical section, so
/// readers never observe a palette that disagrees with the current flag.
/// State machine: {Light, Dark}, initial Light, toggle is the only
/// transition.
pub struct ThemeStore {
    state: RwLock<Theme>,
    tx: watch::Sender<ThemeName>,
}

impl ThemeStore {
    /// Create a store starting in the light theme
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ThemeName::Light);
        Self { state: RwLock::new(light_theme()), tx }
    }

    /// Flip the dark/light flag, returning the new theme name
    pub fn toggle(&self) -> ThemeName {
        let name;
        {
            let mut state = self.state.write();
            name = state.name.toggled();
            *state = theme_for(name);
        }
        let _ = self.tx.send(name);
        name
    }

    /// The current theme (name plus palette)
    pub fn current(&self) -> Theme {
        self.state.read().clone()
    }

    /// The current theme name
    pub fn name(&self) -> ThemeName {
        self.state.read().name
    }

    /// Whether the dark theme is active
    pub fn is_dark(&self) -> bool {
        self.state.read().is_dark()
    }

    /// Subscribe to theme changes
    pub fn subscribe(&self) -> watch::Receiver<ThemeName> {
        self.tx.subscribe()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}
