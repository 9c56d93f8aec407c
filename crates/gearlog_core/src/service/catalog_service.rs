//! Catalog use-case facade.
//!
//! # Responsibility
//! - Validate registration input above the store layer.
//! - Answer lookup and aggregation queries over the catalog collections.
//!
//! # Invariants
//! - A failed registration leaves the store untouched.
//! - Query operations are total: no match means an empty list or 0.0.
//! - List results with a sorting guarantee are sorted alphabetically.

use crate::model::category::Category;
use crate::model::product::Product;
use crate::model::rating::{Rating, RatingValidationError};
use crate::service::stats::{group_by_average, mean_stars};
use crate::store::catalog_store::{CatalogStore, StoreError};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Broad failure classification for callers that only need to distinguish
/// bad input from name collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorKind {
    Validation,
    Duplicate,
}

/// Errors from catalog registration operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// `define_activities` was called with no names.
    NoActivities,
    /// A category links an activity that was never defined.
    UnknownActivity { category: String, activity: String },
    /// Rating input failed record validation.
    InvalidRating(RatingValidationError),
    /// A product with this name is already registered.
    DuplicateProduct(String),
}

impl CatalogError {
    /// Classifies this error into the facade's two failure kinds.
    pub fn kind(&self) -> CatalogErrorKind {
        match self {
            Self::DuplicateProduct(_) => CatalogErrorKind::Duplicate,
            Self::NoActivities | Self::UnknownActivity { .. } | Self::InvalidRating(_) => {
                CatalogErrorKind::Validation
            }
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActivities => write!(f, "no activity provided"),
            Self::UnknownActivity { category, activity } => {
                write!(f, "category `{category}` links unknown activity `{activity}`")
            }
            Self::InvalidRating(err) => write!(f, "{err}"),
            Self::DuplicateProduct(name) => write!(f, "product already registered: {name}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRating(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicateProduct(name) => Self::DuplicateProduct(name),
            StoreError::InvalidRating(err) => Self::InvalidRating(err),
        }
    }
}

/// Catalog facade owning all portal state for one caller.
#[derive(Debug, Default)]
pub struct CatalogService {
    store: CatalogStore,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines activity types treated by the portal.
    ///
    /// Can be invoked repeatedly; names seen before are kept once.
    ///
    /// # Errors
    /// - `NoActivities` when `names` yields nothing.
    pub fn define_activities<I, S>(&mut self, names: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(CatalogError::NoActivities);
        }

        let mut added = 0usize;
        for name in names {
            if self.store.insert_activity(name) {
                added += 1;
            }
        }
        debug!("event=activities_defined module=catalog added={added}");
        Ok(())
    }

    /// Returns defined activity names, sorted alphabetically.
    pub fn activities(&self) -> Vec<String> {
        self.store.activities()
    }

    /// Adds a category and its linked activities.
    ///
    /// Every linked activity must have been defined first; the category is
    /// not stored when any link fails to resolve. Duplicate category names
    /// are accepted as distinct records.
    ///
    /// # Errors
    /// - `UnknownActivity` naming the first unresolved link.
    pub fn add_category<I, S>(
        &mut self,
        name: impl Into<String>,
        linked: I,
    ) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let linked: Vec<String> = linked.into_iter().map(Into::into).collect();
        for activity in &linked {
            if !self.store.contains_activity(activity) {
                return Err(CatalogError::UnknownActivity {
                    category: name,
                    activity: activity.clone(),
                });
            }
        }

        debug!(
            "event=category_added module=catalog name={name} linked={}",
            linked.len()
        );
        self.store.push_category(Category::new(name, linked));
        Ok(())
    }

    /// Returns the number of stored categories.
    pub fn category_count(&self) -> usize {
        self.store.category_count()
    }

    /// Returns names of categories linked to the given activity.
    ///
    /// Sorted alphabetically; a name carried by several matching categories
    /// appears once.
    pub fn categories_for_activity(&self, activity: &str) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .store
            .categories()
            .iter()
            .filter(|category| category.links_activity(activity))
            .map(|category| category.name.as_str())
            .collect();
        names.into_iter().map(str::to_string).collect()
    }

    /// Registers a product under a unique name.
    ///
    /// The referenced activity and category are free-form names; they are
    /// not checked against the registered sets.
    ///
    /// # Errors
    /// - `DuplicateProduct` when the name is already taken.
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        activity: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let product = Product::new(name, activity, category);
        let name = product.name.clone();
        self.store.insert_product(product)?;
        debug!("event=product_added module=catalog name={name}");
        Ok(())
    }

    /// Returns product names in the given category, sorted alphabetically.
    pub fn products_for_category(&self, category: &str) -> Vec<String> {
        self.store
            .products()
            .filter(|product| product.category == category)
            .map(|product| product.name.clone())
            .collect()
    }

    /// Returns product names in the given activity, sorted alphabetically.
    pub fn products_for_activity(&self, activity: &str) -> Vec<String> {
        self.store
            .products()
            .filter(|product| product.activity == activity)
            .map(|product| product.name.clone())
            .collect()
    }

    /// Returns product names matching the activity and any of the given
    /// categories, sorted alphabetically.
    pub fn products_for<I, S>(&self, activity: &str, categories: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: BTreeSet<String> = categories.into_iter().map(Into::into).collect();
        self.store
            .products()
            .filter(|product| {
                product.activity == activity && categories.contains(product.category.as_str())
            })
            .map(|product| product.name.clone())
            .collect()
    }

    /// Submits one rating for a product name.
    ///
    /// Product existence is not checked; reviews may arrive before the
    /// product is registered.
    ///
    /// # Errors
    /// - `InvalidRating` when `stars` is outside the 0..=5 range.
    pub fn add_rating(
        &mut self,
        product: impl Into<String>,
        user: impl Into<String>,
        stars: u8,
        comment: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let rating = Rating::new(product, user, stars, comment);
        let product = rating.product.clone();
        self.store.push_rating(rating)?;
        debug!("event=rating_added module=catalog product={product} stars={stars}");
        Ok(())
    }

    /// Returns rendered ratings (`"stars : comment"`) for one product,
    /// sorted by descending star count. Ties keep submission order.
    pub fn ratings_for_product(&self, product: &str) -> Vec<String> {
        let mut matches: Vec<&Rating> = self
            .store
            .ratings()
            .iter()
            .filter(|rating| rating.product == product)
            .collect();
        matches.sort_by(|a, b| b.stars.cmp(&a.stars));
        matches.into_iter().map(|rating| rating.to_string()).collect()
    }

    /// Returns the mean star score for one product, 0.0 without ratings.
    pub fn average_stars_for_product(&self, product: &str) -> f64 {
        mean_stars(
            self.store
                .ratings()
                .iter()
                .filter(|rating| rating.product == product)
                .map(|rating| rating.stars),
        )
    }

    /// Returns the mean star score across every stored rating, 0.0 when the
    /// portal has none.
    pub fn average_stars(&self) -> f64 {
        mean_stars(self.store.ratings().iter().map(|rating| rating.stars))
    }

    /// Maps each activity to the mean stars across its products' ratings.
    ///
    /// Keys come out in alphabetical order. Activities without a rated,
    /// registered product are omitted; ratings whose product name matches no
    /// registered product cannot be attributed to an activity and are
    /// skipped here (they still count toward [`Self::average_stars`]).
    pub fn stars_per_activity(&self) -> BTreeMap<String, f64> {
        let mut sums: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
        for rating in self.store.ratings() {
            let Some(product) = self.store.product(&rating.product) else {
                continue;
            };
            let (total, count) = sums.entry(product.activity.as_str()).or_insert((0, 0));
            *total += u32::from(rating.stars);
            *count += 1;
        }

        sums.into_iter()
            .map(|(activity, (total, count))| {
                (activity.to_string(), f64::from(total) / f64::from(count))
            })
            .collect()
    }

    /// Groups rated products by their average star score.
    ///
    /// Tiers are sorted by descending average; product names inside one tier
    /// are alphabetical. Products without ratings do not appear.
    pub fn products_per_average_stars(&self) -> Vec<(f64, Vec<String>)> {
        let averages: Vec<(String, f64)> = self
            .store
            .products()
            .filter_map(|product| {
                let stars: Vec<u8> = self
                    .store
                    .ratings()
                    .iter()
                    .filter(|rating| rating.product == product.name)
                    .map(|rating| rating.stars)
                    .collect();
                if stars.is_empty() {
                    return None;
                }
                Some((product.name.clone(), mean_stars(stars)))
            })
            .collect();

        group_by_average(averages)
    }
}
