//! Rating aggregation over a product's reviews.
//!
//! All functions are pure and total: an empty review set yields a zero count,
//! no average, an empty histogram and no latest reviews.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::review::Review;

/// How many commented reviews a product page shows by default.
pub const DEFAULT_LATEST_REVIEWS: usize = 3;

/// Rating value -> number of reviews with that rating.
pub type RatingHistogram = BTreeMap<u8, u64>;

/// Mean of all present ratings, rounded to one decimal place.
///
/// `None` means "no rating yet"; a product without ratings is never reported as 0 stars.
/// Reviews without a rating are left out of the mean.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    let (sum, count) = reviews
        .iter()
        .filter_map(Review::rating)
        .fold((0u64, 0u64), |(sum, count), r| (sum + u64::from(r.value()), count + 1));

    if count == 0 {
        return None;
    }
    Some(round_one_decimal(sum as f64 / count as f64))
}

/// Number of reviews per rating value. Only values that occur appear as keys.
pub fn rating_histogram(reviews: &[Review]) -> RatingHistogram {
    let mut histogram = RatingHistogram::new();
    for rating in reviews.iter().filter_map(Review::rating) {
        *histogram.entry(rating.value()).or_insert(0) += 1;
    }
    histogram
}

/// Total number of reviews, including those without a rating.
pub fn rating_count(reviews: &[Review]) -> u64 {
    reviews.len() as u64
}

/// Reviews with a non-blank body, newest first, at most `limit` of them.
pub fn latest_commented_reviews(reviews: &[Review], limit: usize) -> Vec<&Review> {
    let mut commented: Vec<&Review> = reviews.iter().filter(|r| r.has_comment()).collect();
    commented.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    commented.truncate(limit);
    commented
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The derived rating fields of one product, computed on read.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RatingSummary {
    pub average: Option<f64>,
    pub count: u64,
    pub histogram: RatingHistogram,
}

impl RatingSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        Self {
            average: average_rating(reviews),
            count: rating_count(reviews),
            histogram: rating_histogram(reviews),
        }
    }
}
