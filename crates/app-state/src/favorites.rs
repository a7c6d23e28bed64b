//! Favorites store
//!
//! Owns the ordered, identifier-unique set of favorited recipes. The set is
//! loaded from the snapshot sink in the background at store creation and the
//! full set is re-persisted after every mutation. In-memory state is the
//! source of truth: a failed persist never rolls a mutation back, and the
//! next mutation's write carries the newer state to disk.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

use mealdb_client::MealSummary;
use storage::{SnapshotSink, SnapshotWriter};

/// Fixed storage key for the serialized favorites blob
pub const FAVORITES_KEY: &str = "@favoritos_meals";

#[derive(Debug, Default)]
struct FavoritesState {
    meals: Vec<MealSummary>,
    /// Bumped on every toggle; the background load only installs the
    /// persisted set while this is still zero.
    generation: u64,
}

/// Durable set of favorited recipes, shared across screens
///
/// Queries and the toggle mutator are synchronous; persistence happens in
/// the background through a [`SnapshotWriter`]. Readers may observe an empty
/// set for a brief window after creation until the persisted set is loaded —
/// nothing blocks screen rendering on the load.
pub struct FavoritesStore {
    state: RwLock<FavoritesState>,
    writer: SnapshotWriter<Vec<MealSummary>>,
    ready_rx: watch::Receiver<bool>,
}

impl FavoritesStore {
    /// Create the store and start the background load from the sink
    ///
    /// An absent blob, an unreadable sink, or malformed JSON all degrade to
    /// an empty set. Must be called within a tokio runtime.
    pub fn open(sink: Arc<dyn SnapshotSink>) -> Arc<Self> {
        let (ready_tx, ready_rx) = watch::channel(false);
        let store = Arc::new(Self {
            state: RwLock::new(FavoritesState::default()),
            writer: SnapshotWriter::new(sink.clone(), FAVORITES_KEY),
            ready_rx,
        });

        let load_target = Arc::clone(&store);
        tokio::spawn(async move {
            let loaded = match sink.restore(FAVORITES_KEY).await {
                Ok(Some(blob)) => match serde_json::from_str::<Vec<MealSummary>>(&blob) {
                    Ok(meals) => dedup_by_id(meals),
                    Err(e) => {
                        tracing::warn!(error = %e, "malformed favorites blob, starting empty");
                        Vec::new()
                    }
                },
                Ok(None) => Vec::new(),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read favorites blob, starting empty");
                    Vec::new()
                }
            };

            {
                let mut state = load_target.state.write();
                if state.generation == 0 {
                    state.meals = loaded;
                } else {
                    // a toggle already happened; in-memory state wins
                    tracing::debug!("favorites mutated before load completed, keeping memory");
                }
            }
            let _ = ready_tx.send(true);
        });

        store
    }

    /// Whether a recipe identifier is currently favorited
    pub fn contains(&self, id: &str) -> bool {
        self.state.read().meals.iter().any(|m| m.id_meal == id)
    }

    /// Toggle a recipe's membership, returning the new membership state
    ///
    /// If a recipe with the same identifier is present it is removed;
    /// otherwise the given snapshot is appended. The full set is then queued
    /// for persistence.
    pub fn toggle(&self, meal: MealSummary) -> bool {
        let snapshot;
        let now_member;
        {
            let mut state = self.state.write();
            if let Some(pos) = state.meals.iter().position(|m| m.id_meal == meal.id_meal) {
                state.meals.remove(pos);
                now_member = false;
            } else {
                state.meals.push(meal);
                now_member = true;
            }
            state.generation += 1;
            snapshot = state.meals.clone();
        }
        self.writer.submit(snapshot);
        now_member
    }

    /// The current ordered favorites collection
    pub fn all(&self) -> Vec<MealSummary> {
        self.state.read().meals.clone()
    }

    /// Number of favorited recipes
    pub fn len(&self) -> usize {
        self.state.read().meals.len()
    }

    /// Whether the favorites set is empty
    pub fn is_empty(&self) -> bool {
        self.state.read().meals.is_empty()
    }

    /// Wait until the background load has completed
    pub async fn ready(&self) {
        let mut rx = self.ready_rx.clone();
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                break;
            }
        }
    }

    /// Wait until the most recent mutation's persist has been attempted
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    /// Flush and stop the persistence writer
    pub async fn shutdown(&self) {
        self.writer.shutdown().await;
    }
}

/// Drop later entries that repeat an identifier, keeping first occurrence
fn dedup_by_id(meals: Vec<MealSummary>) -> Vec<MealSummary> {
    let mut seen = std::collections::HashSet::new();
    meals
        .into_iter()
        .filter(|m| seen.insert(m.id_meal.clone()))
        .collect()
}
