//! Rating domain record.
//!
//! # Responsibility
//! - Hold one user-submitted review: product, user, star score, comment.
//! - Enforce the 0..=5 star range before a write path stores the record.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another rating.
//! - Every stored rating satisfies `stars <= MAX_STARS`.
//! - The rendered form is `"{stars} : {comment}"` and is what product
//!   rating lists display.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Highest star score a rating may carry.
pub const MAX_STARS: u8 = 5;

/// Stable identifier for a stored rating.
pub type RatingId = Uuid;

/// Validation failures for rating records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingValidationError {
    /// Star score above the allowed range.
    StarsOutOfRange(u8),
}

impl Display for RatingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StarsOutOfRange(stars) => {
                write!(f, "stars ({stars}) must be between 0 and {MAX_STARS}")
            }
        }
    }
}

impl Error for RatingValidationError {}

/// One user review of a product.
///
/// The product link is a plain name reference; reviews are accepted for any
/// product name, registered or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Stable id used for auditing and export.
    pub uuid: RatingId,
    /// Name of the rated product.
    pub product: String,
    /// Name of the submitting user.
    pub user: String,
    /// Star score, `0..=MAX_STARS`.
    pub stars: u8,
    /// Free-text comment shown next to the score.
    pub comment: String,
}

impl Rating {
    /// Creates a rating with a generated stable id.
    pub fn new(
        product: impl Into<String>,
        user: impl Into<String>,
        stars: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), product, user, stars, comment)
    }

    /// Creates a rating with a caller-provided stable id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        uuid: RatingId,
        product: impl Into<String>,
        user: impl Into<String>,
        stars: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            product: product.into(),
            user: user.into(),
            stars,
            comment: comment.into(),
        }
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `StarsOutOfRange` when `stars` exceeds [`MAX_STARS`].
    pub fn validate(&self) -> Result<(), RatingValidationError> {
        if self.stars > MAX_STARS {
            return Err(RatingValidationError::StarsOutOfRange(self.stars));
        }
        Ok(())
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.stars, self.comment)
    }
}
