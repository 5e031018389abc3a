//! Melt & Munch catalog store
//!
//! Reads products, variants and promo banners from the shop's PostgREST endpoint.

pub mod config;
pub mod errors;
pub mod records;
pub mod service;

pub use config::StoreConfig;
pub use errors::{CatalogStoreError, RecordError};
pub use service::{CatalogStore, MockCatalogStore, PostgrestCatalogStore, load_catalog};
