//! Infrastructure layer: storage, configuration, and the card-serving service.

pub mod cards;
pub mod config;
pub mod seed;
pub mod store;

pub use cards::CatalogService;
pub use config::CatalogConfig;
pub use seed::{Seed, SeedError, load_seed};
pub use store::{CatalogStore, InMemoryCatalogStore, StoreError};
