//! Recipe detail loading
//!
//! Backs the detail screen. The screen navigates in with the minimal
//! snapshot from whatever list it came from; the service upgrades it to the
//! full recipe when the lookup succeeds and falls back to the carried
//! snapshot when it does not. Opening the screen without a recipe reference
//! is the one error that reaches the user.

use std::sync::Arc;

use mealdb_client::{MealDbClient, MealDetail, MealSummary};

/// Errors a detail screen must show rather than degrade around
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DetailError {
    /// The screen was opened without a recipe reference
    #[error("No recipe was provided")]
    MissingReference,
}

/// Detail loading service
pub struct DetailService {
    client: Arc<MealDbClient>,
}

impl DetailService {
    /// Create a new detail service
    pub fn new(client: Arc<MealDbClient>) -> Self {
        Self { client }
    }

    /// Load the full recipe for the carried reference
    ///
    /// A lookup miss or any client failure falls back to the reference
    /// promoted to a detail with no extended fields.
    pub async fn load(&self, reference: Option<MealSummary>) -> Result<MealDetail, DetailError> {
        let Some(summary) = reference else {
            return Err(DetailError::MissingReference);
        };

        match self.client.lookup(&summary.id_meal).await {
            Ok(Some(detail)) => Ok(detail),
            Ok(None) => {
                tracing::warn!(id = %summary.id_meal, "recipe not found, using carried snapshot");
                Ok(MealDetail::from(summary))
            }
            Err(e) => {
                tracing::warn!(id = %summary.id_meal, error = %e, "lookup failed, using carried snapshot");
                Ok(MealDetail::from(summary))
            }
        }
    }
}
