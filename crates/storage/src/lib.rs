//! Storage layer for Recetario
//!
//! This crate provides on-device key-value storage and the single-writer
//! snapshot queue used to mirror in-memory state to disk.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod snapshot;

pub use kv::{KvConfig, KvError, KvStore};
pub use snapshot::{SnapshotError, SnapshotSink, SnapshotWriter};
