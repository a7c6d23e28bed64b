//! Snapshot persistence seam and single-writer queue
//!
//! In-memory stores mirror their state to disk as one serialized blob per
//! store. The [`SnapshotSink`] trait is the seam between a store and the
//! durable backend; [`SnapshotWriter`] serializes writes through a background
//! task so that at most one persist is in flight and a newer snapshot always
//! supersedes an older queued one. After quiescence the persisted blob equals
//! the final in-memory state.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::kv::{KvError, KvStore};

/// Snapshot persistence error types
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying key-value store error
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Sink is unavailable or rejected the write
    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}

/// Result type for snapshot operations
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Durable backend for serialized state blobs
///
/// `restore` reads the blob stored under a key, `persist` overwrites it.
/// Stores never call the sink directly for writes; they go through a
/// [`SnapshotWriter`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotSink: Send + Sync + 'static {
    /// Read the blob stored under `key`, if any
    async fn restore(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`
    async fn persist(&self, key: &str, blob: &str) -> Result<()>;
}

#[async_trait]
impl SnapshotSink for KvStore {
    async fn restore(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get_blob(key)?)
    }

    async fn persist(&self, key: &str, blob: &str) -> Result<()> {
        Ok(self.put_blob(key, blob)?)
    }
}

/// What the writer task should do next
#[derive(Debug, Clone)]
enum Pending<T> {
    /// Nothing queued
    Idle,
    /// Persist this snapshot, identified by submission sequence number
    Write(u64, T),
    /// Stop the writer task
    Stop,
}

/// Single-writer persistence queue for one store's snapshots
///
/// `submit` is synchronous and non-blocking: it replaces whatever snapshot is
/// queued but not yet started, so intermediate states may never reach disk.
/// Exactly one persist runs at a time. A failed persist is logged and counted
/// as attempted; the in-memory state it mirrored stays authoritative and the
/// next submission carries the newer state to disk.
pub struct SnapshotWriter<T> {
    tx: watch::Sender<Pending<T>>,
    completed_rx: watch::Receiver<u64>,
    seq: AtomicU64,
    handle: Mutex<Option<JoinHandle<()>>>,
    key: String,
}

impl<T> SnapshotWriter<T>
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    /// Spawn the writer task for one persisted key
    ///
    /// Must be called within a tokio runtime.
    pub fn new(sink: Arc<dyn SnapshotSink>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (tx, mut rx) = watch::channel(Pending::Idle);
        let (completed_tx, completed_rx) = watch::channel(0u64);

        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            loop {
                if rx.changed().await.is_err() {
                    break;
                }
                let pending = rx.borrow_and_update().clone();
                match pending {
                    Pending::Idle => continue,
                    Pending::Stop => break,
                    Pending::Write(seq, snapshot) => {
                        match serde_json::to_string(&snapshot) {
                            Ok(blob) => {
                                if let Err(e) = sink.persist(&task_key, &blob).await {
                                    tracing::warn!(
                                        key = %task_key,
                                        error = %e,
                                        "failed to persist snapshot"
                                    );
                                }
                            }
                            Err(e) => {
                                tracing::warn!(
                                    key = %task_key,
                                    error = %e,
                                    "failed to serialize snapshot"
                                );
                            }
                        }
                        // attempted, even on failure; persistence is best-effort
                        let _ = completed_tx.send(seq);
                    }
                }
            }
        });

        Self {
            tx,
            completed_rx,
            seq: AtomicU64::new(0),
            handle: Mutex::new(Some(handle)),
            key,
        }
    }

    /// Queue a snapshot for persistence, superseding any queued-but-not-started one
    ///
    /// Returns the submission sequence number.
    pub fn submit(&self, snapshot: T) -> u64 {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        if self.tx.send(Pending::Write(seq, snapshot)).is_err() {
            tracing::debug!(key = %self.key, "snapshot writer already stopped");
        }
        seq
    }

    /// Wait until the most recently submitted snapshot has been attempted
    pub async fn flush(&self) {
        let target = self.seq.load(Ordering::SeqCst);
        if target == 0 {
            return;
        }
        let mut rx = self.completed_rx.clone();
        while *rx.borrow_and_update() < target {
            if rx.changed().await.is_err() {
                break;
            }
        }
    }

    /// Flush, stop the writer task, and join it
    pub async fn shutdown(&self) {
        self.flush().await;
        let _ = self.tx.send(Pending::Stop);
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::warn!(key = %self.key, error = %e, "snapshot writer task panicked");
            }
        }
    }

    /// The key this writer persists under
    pub fn key(&self) -> &str {
        &self.key
    }
}
