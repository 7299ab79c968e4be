//! Domain types for the bird record service.
//!
//! Holds the [`bird::Bird`] record, the [`store::BirdStore`] persistence
//! contract with its in-memory implementation, and the shared error type.
//! The relational implementation lives in `birdwatch-db`.

pub mod bird;
pub mod error;
pub mod store;
