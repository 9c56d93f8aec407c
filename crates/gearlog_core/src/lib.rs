//! Core domain logic for GearLog, a sports-products review portal.
//! This crate is the single source of truth for catalog invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId};
pub use model::product::{Product, ProductId};
pub use model::rating::{Rating, RatingId, RatingValidationError, MAX_STARS};
pub use service::catalog_service::{CatalogError, CatalogErrorKind, CatalogService};
pub use store::catalog_store::{CatalogStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
