//! Recetario — headless core for a recipe-browsing app
//!
//! Wires the remote recipe client, on-device storage, and the shared stores
//! into a single [`App`] whose handles are passed explicitly to screens.
//! There is no ambient global state anywhere in the workspace: everything a
//! screen needs is a field on the [`App`] it was constructed with.
//!
//! # Example
//!
//! ```no_run
//! use recetario::{App, AppConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     recetario::telemetry::init();
//!
//!     let app = App::open(AppConfig::default())?;
//!
//!     let featured = app.catalog.featured().await;
//!     if let Some(meal) = featured.first() {
//!         app.favorites.toggle(meal.clone());
//!     }
//!
//!     app.shutdown().await;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod telemetry;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

pub use app_core::{CatalogService, DetailService, SearchOutcome, SearchService, DEFAULT_CATEGORY};
pub use app_state::{FavoritesStore, FAVORITES_KEY};
pub use app_ui::{Theme, ThemeName, ThemeStore};
pub use mealdb_client::{Category, MealDbClient, MealDbConfig, MealDetail, MealSummary};
pub use storage::{KvConfig, KvStore};

use storage::SnapshotSink;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Directory for durable state; `None` keeps storage in memory
    pub data_dir: Option<PathBuf>,
    /// Remote recipe service configuration
    pub client: MealDbConfig,
}

impl AppConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Store durable state under a directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Use a custom client configuration
    pub fn with_client(mut self, client: MealDbConfig) -> Self {
        self.client = client;
        self
    }
}

/// The assembled application core
///
/// One instance per process; screens receive the handles they need from
/// here. The stores are shared; the services are cheap per-construction
/// wrappers over the shared client.
pub struct App {
    /// Remote recipe service client
    pub client: Arc<MealDbClient>,
    /// Durable favorites set
    pub favorites: Arc<FavoritesStore>,
    /// Shared theme selection
    pub theme: Arc<ThemeStore>,
    /// Category browsing operations
    pub catalog: CatalogService,
    /// Name search operations
    pub search: SearchService,
    /// Detail loading operations
    pub detail: DetailService,
    storage: Arc<KvStore>,
}

impl App {
    /// Open storage and wire up the stores and services
    ///
    /// Must be called within a tokio runtime; the favorites load and the
    /// persistence writer run as background tasks.
    pub fn open(config: AppConfig) -> anyhow::Result<Self> {
        let storage = match &config.data_dir {
            Some(dir) => {
                let path = dir.join("recetario_kv.db");
                KvStore::new(KvConfig::new(path.to_string_lossy()))
                    .with_context(|| format!("opening key-value store in {}", dir.display()))?
            }
            None => KvStore::in_memory().context("opening in-memory key-value store")?,
        };
        let storage = Arc::new(storage);

        let client = Arc::new(MealDbClient::new(config.client));
        let favorites = FavoritesStore::open(storage.clone() as Arc<dyn SnapshotSink>);
        let theme = Arc::new(ThemeStore::new());

        Ok(Self {
            catalog: CatalogService::new(client.clone()),
            search: SearchService::new(client.clone()),
            detail: DetailService::new(client.clone()),
            client,
            favorites,
            theme,
            storage,
        })
    }

    /// Flush pending persistence and stop background tasks
    pub async fn shutdown(&self) {
        self.favorites.shutdown().await;
        if let Err(e) = self.storage.flush() {
            tracing::warn!(error = %e, "failed to flush storage on shutdown");
        }
    }
}
