//! SQLite persistence for curated landing overrides.

pub mod repo;

pub use repo::*;
