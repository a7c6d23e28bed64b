//! Core application logic for Recetario
//!
//! This crate contains the screen-facing operations: category browsing,
//! name search, and recipe detail loading. Each service holds an injected
//! client handle and embeds the failure-degradation policy its screen
//! expects, so remote failures never propagate past this layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod detail;
pub mod search;

pub use catalog::{CatalogService, DEFAULT_CATEGORY};
pub use detail::{DetailError, DetailService};
pub use search::{SearchOutcome, SearchService};
