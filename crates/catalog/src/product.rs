use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_core::{BrandId, CategoryId, DomainError, DomainResult, Entity, ProductId, ValueObject};

use crate::buyable::Buyable;
use crate::slug::{Slug, SlugGenerator};

/// Product pricing, in smallest currency unit (e.g. cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pricing {
    pub price: u64,
    /// Previous price, shown struck through next to `price`.
    pub old_price: Option<u64>,
}

impl Pricing {
    pub fn new(price: u64, old_price: Option<u64>) -> Self {
        Self { price, old_price }
    }

    /// True when there is an old price above the current one.
    pub fn is_discounted(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }
}

impl ValueObject for Pricing {}

/// Administrative input for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub brand_id: BrandId,
    pub price: u64,
    pub old_price: Option<u64>,
    pub quantity: u32,
}

impl NewProduct {
    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        Ok(())
    }
}

/// A catalog product.
///
/// Relations (brand, category, reviews, media) are referenced by id only; see
/// [`crate::ResolvedProduct`] for a product with its relations loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    slug: Slug,
    name: String,
    sku: String,
    description: Option<String>,
    pricing: Pricing,
    quantity: u32,
    brand_id: BrandId,
    category_id: CategoryId,
    tags: BTreeSet<String>,
}

impl Product {
    /// Create a product, deriving its slug from the name.
    pub fn create(
        id: ProductId,
        input: NewProduct,
        slugs: &dyn SlugGenerator,
        is_taken: &dyn Fn(&Slug) -> bool,
    ) -> DomainResult<Self> {
        input.validate()?;
        let name = input.name.trim().to_string();
        let slug = slugs.generate(&name, is_taken)?;

        Ok(Self {
            id,
            slug,
            name,
            sku: input.sku.trim().to_string(),
            description: input.description,
            pricing: Pricing::new(input.price, input.old_price),
            quantity: input.quantity,
            brand_id: input.brand_id,
            category_id: input.category_id,
            tags: BTreeSet::new(),
        })
    }

    /// Rename the product. The slug is regenerated only when the name changes.
    ///
    /// Returns whether the slug changed.
    pub fn rename(
        &mut self,
        name: &str,
        slugs: &dyn SlugGenerator,
        is_taken: &dyn Fn(&Slug) -> bool,
    ) -> DomainResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if name == self.name {
            return Ok(false);
        }

        let slug = slugs.generate(name, is_taken)?;
        let changed = slug != self.slug;
        self.name = name.to_string();
        self.slug = slug;
        Ok(changed)
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Key products are addressed by in URLs.
    pub fn route_key(&self) -> &str {
        self.slug.as_str()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn pricing(&self) -> Pricing {
        self.pricing
    }

    pub fn reprice(&mut self, pricing: Pricing) {
        self.pricing = pricing;
    }

    pub fn is_discounted(&self) -> bool {
        self.pricing.is_discounted()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Attach a tag; returns false if it was already attached.
    pub fn attach_tag(&mut self, tag: &str) -> DomainResult<bool> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(DomainError::validation("tag cannot be empty"));
        }
        Ok(self.tags.insert(tag.to_string()))
    }

    pub fn detach_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag.trim())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag.trim())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Buyable for Product {
    fn buyable_identifier(&self) -> &str {
        self.slug.as_str()
    }

    fn buyable_description(&self) -> &str {
        &self.name
    }

    fn buyable_price(&self) -> u64 {
        self.pricing.price
    }

    // Weight is not tracked for products yet; carts see every product as weightless.
    fn buyable_weight(&self) -> u64 {
        0
    }
}
