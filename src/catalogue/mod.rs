//! Persistent pattern catalogue

/// Search string sanitizing and name matching
pub mod search;
/// JSON-backed catalogue store
pub mod store;

pub use store::{Catalogue, CatalogueEntry, CatalogueReference};
