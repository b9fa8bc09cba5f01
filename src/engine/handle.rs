//! Atomically replaceable holder of the published graph.

use crate::core::GraphModel;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// The model currently published, with reload bookkeeping.
#[derive(Clone, Debug)]
struct Published {
    model: Arc<GraphModel>,
    generation: u64,
    loaded_at: DateTime<Utc>,
}

impl Published {
    fn new(model: GraphModel, generation: u64) -> Self {
        Self {
            model: Arc::new(model),
            generation,
            loaded_at: Utc::now(),
        }
    }
}

/// Shared reference to the loaded graph.
///
/// Readers take an `Arc` snapshot and query it without holding the lock.
/// A reload swaps the whole model at once, so a query sees either the old
/// graph or the new one, never a mix.
#[derive(Debug)]
pub struct GraphHandle {
    current: RwLock<Published>,
}

impl GraphHandle {
    pub fn new(model: GraphModel) -> Self {
        let published = Published::new(model, 0);
        info!(
            areas = published.model.areas().len(),
            activities = published.model.activity_count(),
            "workflow graph published"
        );
        Self {
            current: RwLock::new(published),
        }
    }

    /// The model as of now. Later reloads do not affect it.
    pub fn snapshot(&self) -> Arc<GraphModel> {
        Arc::clone(&self.current.read().model)
    }

    /// Replace the model wholesale, returning the new generation.
    pub fn replace(&self, model: GraphModel) -> u64 {
        let mut current = self.current.write();
        let next = Published::new(model, current.generation + 1);
        info!(
            generation = next.generation,
            areas = next.model.areas().len(),
            activities = next.model.activity_count(),
            "workflow graph reloaded"
        );
        *current = next;
        current.generation
    }

    /// Number of reloads since the handle was created.
    pub fn generation(&self) -> u64 {
        self.current.read().generation
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.current.read().loaded_at
    }
}
