//! In-memory catalog collections.
//!
//! # Responsibility
//! - Own activity, category, product and rating state for one facade.
//! - Enforce product-name uniqueness and rating validation on insertion.
//!
//! # Invariants
//! - `activities` has set semantics; re-inserting a name is a no-op.
//! - `products` is keyed by name; a name maps to at most one product.
//! - Write paths validate before the first state change (all-or-nothing).

use crate::model::category::Category;
use crate::model::product::Product;
use crate::model::rating::{Rating, RatingValidationError};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Write failures for the in-memory catalog collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A product with this name is already registered.
    DuplicateProduct(String),
    /// Rating record failed validation.
    InvalidRating(RatingValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateProduct(name) => write!(f, "product already registered: {name}"),
            Self::InvalidRating(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateProduct(_) => None,
            Self::InvalidRating(err) => Some(err),
        }
    }
}

impl From<RatingValidationError> for StoreError {
    fn from(value: RatingValidationError) -> Self {
        Self::InvalidRating(value)
    }
}

/// Owned in-memory state behind the catalog facade.
#[derive(Debug, Default)]
pub struct CatalogStore {
    activities: BTreeSet<String>,
    categories: Vec<Category>,
    products: BTreeMap<String, Product>,
    ratings: Vec<Rating>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one activity name; returns whether it was newly added.
    pub fn insert_activity(&mut self, name: impl Into<String>) -> bool {
        self.activities.insert(name.into())
    }

    pub fn contains_activity(&self, name: &str) -> bool {
        self.activities.contains(name)
    }

    /// Returns activity names sorted alphabetically.
    pub fn activities(&self) -> Vec<String> {
        self.activities.iter().cloned().collect()
    }

    /// Appends one category record; duplicate names are accepted.
    pub fn push_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns stored categories in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Registers one product under its unique name.
    ///
    /// # Errors
    /// - `DuplicateProduct` when the name is already taken; the existing
    ///   record is kept unchanged.
    pub fn insert_product(&mut self, product: Product) -> StoreResult<()> {
        if self.products.contains_key(product.name.as_str()) {
            return Err(StoreError::DuplicateProduct(product.name));
        }
        self.products.insert(product.name.clone(), product);
        Ok(())
    }

    /// Returns registered products in name order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Returns one product by its unique name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Stores one rating after validating it.
    ///
    /// # Errors
    /// - `InvalidRating` when the record fails [`Rating::validate`].
    pub fn push_rating(&mut self, rating: Rating) -> StoreResult<()> {
        rating.validate()?;
        self.ratings.push(rating);
        Ok(())
    }

    /// Returns stored ratings in submission order.
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }
}
