//! Products together with whichever relations the caller chose to load.

use storefront_core::{DomainError, DomainResult};

use crate::media::MediaLibrary;
use crate::product::Product;
use crate::rating::{RatingSummary, latest_commented_reviews};
use crate::reference::{Brand, Category};
use crate::review::Review;

/// Which relations a data-access call should resolve alongside a product.
///
/// Nothing is loaded implicitly; each call site states what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductLoad {
    pub brand: bool,
    pub category: bool,
    pub media: bool,
    pub reviews: bool,
}

impl ProductLoad {
    /// Product row only.
    pub fn none() -> Self {
        Self::default()
    }

    /// Everything a product card needs.
    pub fn card() -> Self {
        Self {
            brand: true,
            category: true,
            media: true,
            reviews: true,
        }
    }

    pub fn with_brand(mut self) -> Self {
        self.brand = true;
        self
    }

    pub fn with_category(mut self) -> Self {
        self.category = true;
        self
    }

    pub fn with_media(mut self) -> Self {
        self.media = true;
        self
    }

    pub fn with_reviews(mut self) -> Self {
        self.reviews = true;
        self
    }
}

/// A product with its loaded relations. `None` means "not loaded", which is
/// different from "loaded and empty".
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProduct {
    pub product: Product,
    pub brand: Option<Brand>,
    pub category: Option<Category>,
    pub media: Option<MediaLibrary>,
    pub reviews: Option<Vec<Review>>,
}

impl ResolvedProduct {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            brand: None,
            category: None,
            media: None,
            reviews: None,
        }
    }

    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = Some(brand);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_media(mut self, media: MediaLibrary) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = Some(reviews);
        self
    }

    pub fn brand(&self) -> DomainResult<&Brand> {
        self.brand
            .as_ref()
            .ok_or_else(|| DomainError::missing_relation("brand"))
    }

    pub fn category(&self) -> DomainResult<&Category> {
        self.category
            .as_ref()
            .ok_or_else(|| DomainError::missing_relation("category"))
    }

    pub fn media(&self) -> DomainResult<&MediaLibrary> {
        self.media
            .as_ref()
            .ok_or_else(|| DomainError::missing_relation("media"))
    }

    pub fn reviews(&self) -> DomainResult<&[Review]> {
        self.reviews
            .as_deref()
            .ok_or_else(|| DomainError::missing_relation("reviews"))
    }

    pub fn rating_summary(&self) -> DomainResult<RatingSummary> {
        Ok(RatingSummary::from_reviews(self.reviews()?))
    }

    pub fn latest_commented_reviews(&self, limit: usize) -> DomainResult<Vec<&Review>> {
        Ok(latest_commented_reviews(self.reviews()?, limit))
    }
}
