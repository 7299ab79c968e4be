//! The bird record and its create DTO.

use serde::{Deserialize, Serialize};

/// A recorded bird sighting: a species name and a free-form description.
///
/// Records are immutable once stored; there is no identity field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    pub species: String,
    pub description: String,
}

impl Bird {
    pub fn new(species: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            description: description.into(),
        }
    }
}

/// DTO for recording a new bird from a submitted form.
///
/// Missing form fields are carried as empty strings; presence is not enforced.
#[derive(Debug, Clone, Default)]
pub struct CreateBird {
    pub species: String,
    pub description: String,
}

impl From<CreateBird> for Bird {
    fn from(dto: CreateBird) -> Self {
        Self {
            species: dto.species,
            description: dto.description,
        }
    }
}
