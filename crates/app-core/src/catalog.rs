//! Category browsing
//!
//! Backs the categories tab and the landing recipe list. Remote failures
//! degrade silently to empty lists; the screens render "no results" and the
//! failure is recorded for diagnostics only.

use std::sync::Arc;

use mealdb_client::{Category, MealDbClient, MealSummary};

/// Category shown on the landing recipe list
pub const DEFAULT_CATEGORY: &str = "Seafood";

/// Browsing service for categories and their recipes
pub struct CatalogService {
    client: Arc<MealDbClient>,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(client: Arc<MealDbClient>) -> Self {
        Self { client }
    }

    /// List all recipe categories
    ///
    /// Any client error degrades to an empty list.
    pub async fn categories(&self) -> Vec<Category> {
        match self.client.categories().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!(error = %e, "failed to list categories");
                Vec::new()
            }
        }
    }

    /// List the recipes in one category
    ///
    /// An unknown category and a failed fetch both read as an empty list.
    pub async fn meals_in_category(&self, category: &str) -> Vec<MealSummary> {
        match self.client.filter_by_category(category).await {
            Ok(meals) => meals,
            Err(e) => {
                tracing::warn!(category, error = %e, "failed to list category recipes");
                Vec::new()
            }
        }
    }

    /// The default landing listing
    pub async fn featured(&self) -> Vec<MealSummary> {
        self.meals_in_category(DEFAULT_CATEGORY).await
    }
}
