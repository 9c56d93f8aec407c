//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate store access into the portal's public operation set.
//! - Keep callers decoupled from collection layout details.

pub mod catalog_service;
pub mod stats;
