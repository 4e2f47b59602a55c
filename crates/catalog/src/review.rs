use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId, ReviewId, ValueObject};

/// Star rating left with a review, bounded to `Rating::MIN..=Rating::MAX`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> DomainResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be between {} and {} (got {value})",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl ValueObject for Rating {}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// A customer review of a product.
///
/// Both the rating and the body are optional: a review may be a bare star
/// rating, a comment without stars, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    product_id: ProductId,
    rating: Option<Rating>,
    body: Option<String>,
    created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        id: ReviewId,
        product_id: ProductId,
        rating: Option<Rating>,
        body: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            rating,
            body,
            created_at,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True when the review carries a non-blank comment.
    pub fn has_comment(&self) -> bool {
        self.body.as_deref().is_some_and(|b| !b.trim().is_empty())
    }
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
