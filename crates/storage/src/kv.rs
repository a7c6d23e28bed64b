//! Key-value store for on-device state
//!
//! This module provides a fast, type-safe key-value store using sled. The
//! app uses it for a single serialized favorites blob, but the store itself
//! is general: any serde value can live under any string key.

use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored bytes are not valid UTF-8
    #[error("Invalid blob encoding under key: {0}")]
    InvalidBlob(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None for immediate flush)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "recetario_kv.db".to_string(),
            cache_capacity: 16 * 1024 * 1024, // 16MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Key-value store implementation
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open a durable key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression);

        if let Some(ms) = config.flush_every_ms {
            db_config = db_config.flush_every_ms(Some(ms));
        }

        let db = db_config.open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Get a raw string blob by key
    ///
    /// Unlike [`KvStore::get`], the stored bytes are returned as-is rather
    /// than being decoded as a JSON value.
    pub fn get_blob(&self, key: &str) -> Result<Option<String>> {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| KvError::InvalidBlob(key.to_string())),
            None => Ok(None),
        }
    }

    /// Store a raw string blob under a key, overwriting any previous value
    pub fn put_blob(&self, key: &str, blob: &str) -> Result<()> {
        self.db.insert(key.as_bytes(), blob.as_bytes())?;
        Ok(())
    }

    /// Remove a value by key
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}
