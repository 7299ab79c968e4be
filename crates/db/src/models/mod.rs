//! Row structs for the database tables.
//!
//! Each submodule holds a `FromRow` struct matching the selected columns and
//! its conversion into the domain type from `birdwatch-core`.

pub mod bird;
