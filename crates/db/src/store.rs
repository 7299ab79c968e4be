use async_trait::async_trait;
use birdwatch_core::bird::Bird;
use birdwatch_core::error::CoreError;
use birdwatch_core::store::BirdStore;

use crate::repositories::BirdRepo;
use crate::DbPool;

/// [`BirdStore`] backed by the `birds` table.
#[derive(Clone)]
pub struct PgBirdStore {
    pool: DbPool,
}

impl PgBirdStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BirdStore for PgBirdStore {
    async fn create_bird(&self, bird: &Bird) -> Result<(), CoreError> {
        BirdRepo::create(&self.pool, bird)
            .await
            .map_err(CoreError::storage)
    }

    async fn get_birds(&self) -> Result<Vec<Bird>, CoreError> {
        let rows = BirdRepo::list(&self.pool)
            .await
            .map_err(CoreError::storage)?;
        Ok(rows.into_iter().map(Bird::from).collect())
    }
}
