//! Recipe name search
//!
//! Backs the search tab. Blank input short-circuits without touching the
//! network; zero matches are "no results", not an error. A transport or
//! decode failure is the one search condition that is user-visible, surfaced
//! as [`SearchOutcome::Failed`].

use std::sync::Arc;

use mealdb_client::{MealDbClient, MealSummary};

/// Result of one search interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank input; no request was made
    Idle,
    /// The service answered; an empty list means no matches
    Completed(Vec<MealSummary>),
    /// The request failed; the screen shows an explicit error
    Failed,
}

impl SearchOutcome {
    /// The matched recipes, empty unless the search completed
    pub fn meals(&self) -> &[MealSummary] {
        match self {
            SearchOutcome::Completed(meals) => meals,
            _ => &[],
        }
    }
}

/// Name search service
pub struct SearchService {
    client: Arc<MealDbClient>,
}

impl SearchService {
    /// Create a new search service
    pub fn new(client: Arc<MealDbClient>) -> Self {
        Self { client }
    }

    /// Search recipes by name
    pub async fn search(&self, input: &str) -> SearchOutcome {
        let query = input.trim();
        if query.is_empty() {
            return SearchOutcome::Idle;
        }

        match self.client.search_by_name(query).await {
            Ok(meals) => SearchOutcome::Completed(meals),
            Err(e) => {
                tracing::warn!(query, error = %e, "search request failed");
                SearchOutcome::Failed
            }
        }
    }
}
