//! Application state management for Recetario
//!
//! This crate owns the durable, shared state of the app: the favorites set.
//! Screens hold an `Arc` handle to the store; only the store's own methods
//! mutate its state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod favorites;

pub use favorites::{FavoritesStore, FAVORITES_KEY};
