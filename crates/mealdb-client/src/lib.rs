//! TheMealDB Client Library
//!
//! This crate provides a typed Rust client for the public TheMealDB recipe
//! API, including category listing, category-filtered browsing, name search,
//! and lookup-by-id.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod types;

pub use client::{MealDbClient, MealDbConfig};
pub use types::{Category, MealDetail, MealSummary};

/// Result type for recipe service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for recipe service operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API error with status code and response body
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body from the server
        body: String,
    },
}
