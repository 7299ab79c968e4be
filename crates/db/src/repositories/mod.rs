//! Data access for each table, one repository per table.

mod bird_repo;

pub use bird_repo::BirdRepo;
