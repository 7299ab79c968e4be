use birdwatch_core::bird::Bird;
use sqlx::FromRow;

/// A row from the `birds` table, limited to the columns exposed on [`Bird`].
#[derive(Debug, Clone, FromRow)]
pub struct BirdRow {
    pub species: String,
    pub description: String,
}

impl From<BirdRow> for Bird {
    fn from(row: BirdRow) -> Self {
        Bird {
            species: row.species,
            description: row.description,
        }
    }
}
