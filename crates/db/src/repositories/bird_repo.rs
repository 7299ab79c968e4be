//! Repository for the `birds` table.

use birdwatch_core::bird::Bird;
use sqlx::PgPool;

use crate::models::bird::BirdRow;

/// Column list for `birds` queries.
const COLUMNS: &str = "species, description";

/// Provides data access for bird records.
pub struct BirdRepo;

impl BirdRepo {
    /// Insert one bird. Values are always bound, never interpolated.
    pub async fn create(pool: &PgPool, bird: &Bird) -> Result<(), sqlx::Error> {
        let query = format!("INSERT INTO birds ({COLUMNS}) VALUES ($1, $2)");
        sqlx::query(&query)
            .bind(&bird.species)
            .bind(&bird.description)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List every bird in insertion order.
    ///
    /// A row that fails to decode fails the whole call; no partial list is
    /// returned.
    pub async fn list(pool: &PgPool) -> Result<Vec<BirdRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM birds ORDER BY id");
        sqlx::query_as::<_, BirdRow>(&query).fetch_all(pool).await
    }
}
