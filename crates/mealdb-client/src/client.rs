//! HTTP client for the recipe service
//!
//! This module implements the read-only TheMealDB API surface the app
//! consumes: category listing, category-filtered browsing, name search, and
//! lookup-by-id. Every call is a single GET attempt; there is no retry
//! policy and no default timeout.

use std::time::Duration;

use reqwest::Client as ReqwestClient;
use serde::Deserialize;

use crate::types::{CategoriesResponse, Category, MealDetail, MealSummary, MealsResponse};
use crate::{Error, Result};

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for the recipe service client
#[derive(Debug, Clone)]
pub struct MealDbConfig {
    /// Base API URL including the version segment
    /// (e.g., "https://www.themealdb.com/api/json/v1/1")
    pub base_url: String,
    /// Optional request timeout; `None` lets requests run unbounded
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.themealdb.com/api/json/v1/1".to_string(),
            timeout: None,
            user_agent: format!("Recetario/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl MealDbConfig {
    /// Create a new config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// =============================================================================
// Client Implementation
// =============================================================================

/// Client for the recipe service
///
/// Cheap to clone; the underlying HTTP connection pool is shared. The client
/// is stateless — no session, no auth — so callers share a single instance
/// behind an `Arc` without locking.
///
/// # Examples
/// ```
/// use mealdb_client::{MealDbClient, MealDbConfig};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MealDbClient::new(MealDbConfig::default());
///
///     let categories = client.categories().await?;
///     for category in &categories {
///         println!("{}", category.str_category);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MealDbClient {
    /// HTTP client
    http: ReqwestClient,
    /// Configuration
    config: MealDbConfig,
}

impl MealDbClient {
    /// Create a new client from a config
    pub fn new(config: MealDbConfig) -> Self {
        let mut builder = ReqwestClient::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("Failed to build HTTP client");

        Self { http, config }
    }

    /// List all recipe categories
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let response: CategoriesResponse = self.get_json("categories.php", &[]).await?;
        Ok(response.categories)
    }

    /// List the minimal recipes belonging to a category
    ///
    /// An unknown category is not an error; the service answers
    /// `meals: null`, which reads as an empty list.
    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>> {
        let response: MealsResponse<MealSummary> =
            self.get_json("filter.php", &[("c", category)]).await?;
        Ok(response.meals.unwrap_or_default())
    }

    /// Search recipes by name
    ///
    /// Zero matches come back as an empty list, never as an error.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<MealSummary>> {
        let response: MealsResponse<MealSummary> =
            self.get_json("search.php", &[("s", name)]).await?;
        Ok(response.meals.unwrap_or_default())
    }

    /// Look up one full recipe by identifier
    ///
    /// # Examples
    /// ```
    /// use mealdb_client::{MealDbClient, MealDbConfig};
    ///
    /// async fn example() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = MealDbClient::new(MealDbConfig::default());
    ///
    ///     if let Some(detail) = client.lookup("52772").await? {
    ///         println!("{}", detail.str_meal);
    ///         for line in detail.ingredient_lines() {
    ///             println!("- {}", line);
    ///         }
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    pub async fn lookup(&self, id: &str) -> Result<Option<MealDetail>> {
        let response: MealsResponse<MealDetail> =
            self.get_json("lookup.php", &[("i", id)]).await?;
        Ok(response.meals.unwrap_or_default().into_iter().next())
    }

    /// Execute a GET against one endpoint and decode the JSON body
    async fn get_json<T>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        );
        tracing::debug!("GET {}", url);

        let mut req = self.http.get(&url);
        for (key, value) in params {
            req = req.query(&[(key, value)]);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let data: T = serde_json::from_str(&body)?;
        Ok(data)
    }

    /// Get the client configuration
    pub fn config(&self) -> &MealDbConfig {
        &self.config
    }

    /// Get the base API URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

// =============================================================================
// Tests
// =============================================================================
