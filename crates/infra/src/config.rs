//! Configuration loading and representation.

use storefront_catalog::{DEFAULT_LATEST_REVIEWS, SuffixSlugGenerator};

pub const LATEST_REVIEWS_VAR: &str = "STOREFRONT_LATEST_REVIEWS";
pub const SLUG_MAX_LENGTH_VAR: &str = "STOREFRONT_SLUG_MAX_LENGTH";

/// Catalog runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// How many commented reviews to show per product.
    pub latest_reviews_limit: usize,
    /// Upper bound for generated slugs (before any uniqueness suffix).
    pub slug_max_length: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latest_reviews_limit: DEFAULT_LATEST_REVIEWS,
            slug_max_length: SuffixSlugGenerator::DEFAULT_MAX_LENGTH,
        }
    }
}

impl CatalogConfig {
    /// Read settings from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or unparseable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            latest_reviews_limit: parse_or(&lookup, LATEST_REVIEWS_VAR, defaults.latest_reviews_limit),
            slug_max_length: match parse_or(&lookup, SLUG_MAX_LENGTH_VAR, defaults.slug_max_length) {
                0 => {
                    tracing::warn!(var = SLUG_MAX_LENGTH_VAR, "slug max length must be positive; using default");
                    defaults.slug_max_length
                }
                n => n,
            },
        }
    }

    pub fn with_latest_reviews_limit(mut self, limit: usize) -> Self {
        self.latest_reviews_limit = limit;
        self
    }

    pub fn slug_generator(&self) -> SuffixSlugGenerator {
        SuffixSlugGenerator::new(self.slug_max_length)
    }
}

fn parse_or(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: usize) -> usize {
    match lookup(var) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(var, value = %raw, default, "invalid setting; using default");
                default
            }
        },
    }
}
