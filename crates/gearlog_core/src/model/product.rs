//! Product domain record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a registered product.
pub type ProductId = Uuid;

/// One sellable item, linked by name to an activity and a category.
///
/// Links are plain name references; the catalog does not require them to
/// resolve to a registered activity or category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable id used for auditing and export.
    pub uuid: ProductId,
    /// Unique product name; the public lookup key.
    pub name: String,
    /// Name of the activity this product belongs to.
    pub activity: String,
    /// Name of the category this product belongs to.
    pub category: String,
}

impl Product {
    /// Creates a product with a generated stable id.
    pub fn new(
        name: impl Into<String>,
        activity: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, activity, category)
    }

    /// Creates a product with a caller-provided stable id.
    pub fn with_id(
        uuid: ProductId,
        name: impl Into<String>,
        activity: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            activity: activity.into(),
            category: category.into(),
        }
    }
}
