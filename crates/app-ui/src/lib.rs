//! Theme system for Recetario
//!
//! This crate provides the light/dark theme pair and the shared theme store
//! that the screen tree reads its palette from.
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::{theme_for, ThemeName, ThemeStore};
//!
//! let theme = theme_for(ThemeName::Dark);
//! assert!(theme.is_dark());
//!
//! let store = ThemeStore::new();
//! assert_eq!(store.name(), ThemeName::Light);
//! store.toggle();
//! assert!(store.is_dark());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod theme;

pub use theme::{dark_theme, light_theme, theme_for, Theme, ThemeName, ThemePalette, ThemeStore};
