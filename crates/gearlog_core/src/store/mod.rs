//! In-memory ownership layer for catalog state.
//!
//! # Responsibility
//! - Own the collections behind one catalog facade instance.
//! - Enforce write-path invariants local to a single collection.
//!
//! # Invariants
//! - No ambient global state: every facade instance owns its collections.
//! - A failed write leaves every collection untouched.

pub mod catalog_store;
