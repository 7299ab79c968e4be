//! Persistence contract for bird records.
//!
//! [`BirdStore`] is the only seam handlers depend on. Two implementations
//! exist: [`MemoryBirdStore`] here, and the PostgreSQL-backed store in
//! `birdwatch-db`.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::bird::Bird;
use crate::error::CoreError;

/// Create and list bird records.
#[async_trait]
pub trait BirdStore: Send + Sync {
    /// Persist one record. No validation is applied.
    async fn create_bird(&self, bird: &Bird) -> Result<(), CoreError>;

    /// Return every stored record in insertion order.
    ///
    /// An empty store yields an empty `Vec`, never an error.
    async fn get_birds(&self) -> Result<Vec<Bird>, CoreError>;
}

/// Store handle shared across handlers.
pub type SharedBirdStore = Arc<dyn BirdStore>;

/// Process-lifetime store backed by a lock-guarded list.
#[derive(Clone, Default)]
pub struct MemoryBirdStore {
    birds: Arc<RwLock<Vec<Bird>>>,
}

impl MemoryBirdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given records already stored.
    pub fn with_birds(birds: Vec<Bird>) -> Self {
        Self {
            birds: Arc::new(RwLock::new(birds)),
        }
    }
}

fn poisoned() -> CoreError {
    CoreError::Internal("bird store lock poisoned".to_string())
}

#[async_trait]
impl BirdStore for MemoryBirdStore {
    async fn create_bird(&self, bird: &Bird) -> Result<(), CoreError> {
        self.birds
            .write()
            .map_err(|_| poisoned())?
            .push(bird.clone());
        Ok(())
    }

    async fn get_birds(&self) -> Result<Vec<Bird>, CoreError> {
        Ok(self.birds.read().map_err(|_| poisoned())?.clone())
    }
}
