//! Category domain record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a stored category.
pub type CategoryId = Uuid;

/// A grouping of products, linked to one or more activities.
///
/// The linked-activity list is fixed at creation time. Category names are
/// assumed unique by convention but the catalog does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable id used for auditing and export.
    pub uuid: CategoryId,
    /// Category name shown in listings.
    pub name: String,
    /// Names of the activities this category applies to, in the order they
    /// were given at creation.
    pub linked_activities: Vec<String>,
}

impl Category {
    /// Creates a category with a generated stable id.
    pub fn new(
        name: impl Into<String>,
        linked_activities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, linked_activities)
    }

    /// Creates a category with a caller-provided stable id.
    pub fn with_id(
        uuid: CategoryId,
        name: impl Into<String>,
        linked_activities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            linked_activities: linked_activities.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether this category lists `activity` among its links.
    pub fn links_activity(&self, activity: &str) -> bool {
        self.linked_activities
            .iter()
            .any(|linked| linked == activity)
    }
}
