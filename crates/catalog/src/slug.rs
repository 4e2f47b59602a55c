//! URL-safe slugs and their generation from product names.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ValueObject};

/// URL-safe identifier derived from a name: lowercase ASCII alphanumerics
/// separated by single dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        let well_formed = value
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        if !well_formed {
            return Err(DomainError::validation(format!("slug is not url-safe: {value:?}")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Slug {}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Lowercase ASCII alphanumerics; every other run of characters becomes one dash.
///
/// Non-ASCII letters are dropped rather than transliterated.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_dash = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_matches('-').to_string()
}

/// Produces a slug for a name that no other record currently holds.
///
/// `is_taken` is supplied by whoever owns the uniqueness scope (usually the
/// store), so implementations never touch persistence themselves.
pub trait SlugGenerator: Send + Sync {
    fn generate(&self, source: &str, is_taken: &dyn Fn(&Slug) -> bool) -> DomainResult<Slug>;
}

/// Slugifies the source and appends `-1`, `-2`, ... until the slug is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixSlugGenerator {
    max_length: usize,
}

impl SuffixSlugGenerator {
    pub const DEFAULT_MAX_LENGTH: usize = 250;

    pub fn new(max_length: usize) -> Self {
        Self {
            max_length: max_length.max(1),
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn base(&self, source: &str) -> DomainResult<String> {
        let mut base = slugify(source);
        if base.len() > self.max_length {
            // slugify output is ASCII, so byte truncation is char-safe.
            base.truncate(self.max_length);
            base = base.trim_end_matches('-').to_string();
        }
        if base.is_empty() {
            return Err(DomainError::validation(format!(
                "cannot derive a slug from {source:?}"
            )));
        }
        Ok(base)
    }
}

impl Default for SuffixSlugGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LENGTH)
    }
}

impl SlugGenerator for SuffixSlugGenerator {
    fn generate(&self, source: &str, is_taken: &dyn Fn(&Slug) -> bool) -> DomainResult<Slug> {
        let base = self.base(source)?;
        let candidate = Slug::parse(base.clone())?;
        if !is_taken(&candidate) {
            return Ok(candidate);
        }

        let mut suffix: u64 = 1;
        loop {
            let candidate = Slug::parse(format!("{base}-{suffix}"))?;
            if !is_taken(&candidate) {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }
}
