//! Catalog domain module.
//!
//! Products with their brand, category, reviews, media and tags, plus the
//! read-side computations built on them: rating aggregation and the flat
//! product card. Everything here is deterministic domain logic (no IO, no
//! HTTP, no storage); loading relations is the caller's job.

pub mod buyable;
pub mod card;
pub mod media;
pub mod product;
pub mod rating;
pub mod reference;
pub mod resolved;
pub mod review;
pub mod slug;

pub use buyable::Buyable;
pub use card::ProductCard;
pub use media::{MediaAttachment, MediaLibrary, PRODUCT_MEDIA_COLLECTION};
pub use product::{NewProduct, Pricing, Product};
pub use rating::{
    DEFAULT_LATEST_REVIEWS, RatingHistogram, RatingSummary, average_rating,
    latest_commented_reviews, rating_count, rating_histogram,
};
pub use reference::{Brand, Category};
pub use resolved::{ProductLoad, ResolvedProduct};
pub use review::{Rating, Review};
pub use slug::{Slug, SlugGenerator, SuffixSlugGenerator, slugify};
