//! Catalog storage: the persistence collaborator that resolves products and
//! their relations on request.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use thiserror::Error;

use storefront_catalog::{
    Brand, Category, MediaAttachment, MediaLibrary, NewProduct, Product, ProductLoad, Rating,
    ResolvedProduct, Review, Slug, SlugGenerator, SuffixSlugGenerator,
};
use storefront_core::{BrandId, CategoryId, DomainError, Entity, MediaId, ProductId, ReviewId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("catalog store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::NotFound(_)))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Catalog persistence abstraction.
///
/// Reads take a [`ProductLoad`] so every call site states which relations it
/// needs resolved.
pub trait CatalogStore: Send + Sync {
    fn insert_brand(&self, brand: Brand) -> StoreResult<()>;
    fn insert_category(&self, category: Category) -> StoreResult<()>;
    fn find_brand_by_name(&self, name: &str) -> StoreResult<Option<Brand>>;
    fn find_category_by_name(&self, name: &str) -> StoreResult<Option<Category>>;

    /// Create a product with a freshly generated, unique slug.
    fn create_product(&self, input: NewProduct) -> StoreResult<Product>;
    /// Rename a product; its slug is regenerated if the name changed.
    fn rename_product(&self, slug: &str, name: &str) -> StoreResult<Product>;
    fn attach_tag(&self, slug: &str, tag: &str) -> StoreResult<bool>;

    fn add_review(
        &self,
        slug: &str,
        rating: Option<Rating>,
        body: Option<String>,
        created_at: DateTime<Utc>,
    ) -> StoreResult<Review>;

    fn attach_media(
        &self,
        slug: &str,
        collection: &str,
        name: &str,
        url: &str,
    ) -> StoreResult<MediaAttachment>;

    fn find_by_slug(&self, slug: &str, load: &ProductLoad) -> StoreResult<ResolvedProduct>;
    /// All products, ordered by slug.
    fn list(&self, load: &ProductLoad) -> StoreResult<Vec<ResolvedProduct>>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn insert_brand(&self, brand: Brand) -> StoreResult<()> {
        (**self).insert_brand(brand)
    }

    fn insert_category(&self, category: Category) -> StoreResult<()> {
        (**self).insert_category(category)
    }

    fn find_brand_by_name(&self, name: &str) -> StoreResult<Option<Brand>> {
        (**self).find_brand_by_name(name)
    }

    fn find_category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        (**self).find_category_by_name(name)
    }

    fn create_product(&self, input: NewProduct) -> StoreResult<Product> {
        (**self).create_product(input)
    }

    fn rename_product(&self, slug: &str, name: &str) -> StoreResult<Product> {
        (**self).rename_product(slug, name)
    }

    fn attach_tag(&self, slug: &str, tag: &str) -> StoreResult<bool> {
        (**self).attach_tag(slug, tag)
    }

    fn add_review(
        &self,
        slug: &str,
        rating: Option<Rating>,
        body: Option<String>,
        created_at: DateTime<Utc>,
    ) -> StoreResult<Review> {
        (**self).add_review(slug, rating, body, created_at)
    }

    fn attach_media(
        &self,
        slug: &str,
        collection: &str,
        name: &str,
        url: &str,
    ) -> StoreResult<MediaAttachment> {
        (**self).attach_media(slug, collection, name, url)
    }

    fn find_by_slug(&self, slug: &str, load: &ProductLoad) -> StoreResult<ResolvedProduct> {
        (**self).find_by_slug(slug, load)
    }

    fn list(&self, load: &ProductLoad) -> StoreResult<Vec<ResolvedProduct>> {
        (**self).list(load)
    }
}

#[derive(Debug, Default)]
struct Tables {
    brands: HashMap<BrandId, Brand>,
    categories: HashMap<CategoryId, Category>,
    products: HashMap<ProductId, Product>,
    slugs: HashMap<Slug, ProductId>,
    reviews: HashMap<ProductId, Vec<Review>>,
    media: HashMap<ProductId, MediaLibrary>,
}

impl Tables {
    fn product_id(&self, slug: &str) -> StoreResult<ProductId> {
        Slug::parse(slug)
            .ok()
            .and_then(|s| self.slugs.get(&s).copied())
            .ok_or_else(|| DomainError::not_found(format!("product {slug:?}")).into())
    }

    fn product_mut(&mut self, slug: &str) -> StoreResult<&mut Product> {
        let id = self.product_id(slug)?;
        self.products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("product {slug:?}")).into())
    }

    fn resolve(&self, product: &Product, load: &ProductLoad) -> StoreResult<ResolvedProduct> {
        let id = product.id_typed();
        let mut resolved = ResolvedProduct::new(product.clone());

        if load.brand {
            let brand = self.brands.get(&product.brand_id()).cloned().ok_or_else(|| {
                DomainError::not_found(format!("brand {} of product {}", product.brand_id(), id))
            })?;
            resolved = resolved.with_brand(brand);
        }
        if load.category {
            let category = self.categories.get(&product.category_id()).cloned().ok_or_else(|| {
                DomainError::not_found(format!(
                    "category {} of product {}",
                    product.category_id(),
                    id
                ))
            })?;
            resolved = resolved.with_category(category);
        }
        if load.media {
            resolved = resolved.with_media(self.media.get(&id).cloned().unwrap_or_default());
        }
        if load.reviews {
            resolved = resolved.with_reviews(self.reviews.get(&id).cloned().unwrap_or_default());
        }
        Ok(resolved)
    }
}

/// In-memory catalog store for tests/dev.
pub struct InMemoryCatalogStore {
    tables: RwLock<Tables>,
    slugs: Box<dyn SlugGenerator>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::with_slug_generator(SuffixSlugGenerator::default())
    }

    pub fn with_slug_generator(slugs: impl SlugGenerator + 'static) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            slugs: Box::new(slugs),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for InMemoryCatalogStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InMemoryCatalogStore").finish_non_exhaustive()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn insert_brand(&self, brand: Brand) -> StoreResult<()> {
        let mut tables = self.write()?;
        if tables.brands.values().any(|b| b.name == brand.name) {
            return Err(DomainError::conflict(format!("brand {:?} already exists", brand.name)).into());
        }
        tracing::debug!(brand_id = %brand.id, name = %brand.name, "brand inserted");
        tables.brands.insert(*brand.id(), brand);
        Ok(())
    }

    fn insert_category(&self, category: Category) -> StoreResult<()> {
        let mut tables = self.write()?;
        if tables.categories.values().any(|c| c.name == category.name) {
            return Err(
                DomainError::conflict(format!("category {:?} already exists", category.name)).into(),
            );
        }
        tracing::debug!(category_id = %category.id, name = %category.name, "category inserted");
        tables.categories.insert(*category.id(), category);
        Ok(())
    }

    fn find_brand_by_name(&self, name: &str) -> StoreResult<Option<Brand>> {
        let tables = self.read()?;
        Ok(tables.brands.values().find(|b| b.name == name.trim()).cloned())
    }

    fn find_category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        let tables = self.read()?;
        Ok(tables.categories.values().find(|c| c.name == name.trim()).cloned())
    }

    fn create_product(&self, input: NewProduct) -> StoreResult<Product> {
        let mut tables = self.write()?;
        if !tables.brands.contains_key(&input.brand_id) {
            return Err(DomainError::not_found(format!("brand {}", input.brand_id)).into());
        }
        if !tables.categories.contains_key(&input.category_id) {
            return Err(DomainError::not_found(format!("category {}", input.category_id)).into());
        }

        let product = {
            let taken = |slug: &Slug| tables.slugs.contains_key(slug);
            Product::create(ProductId::new(), input, self.slugs.as_ref(), &taken)?
        };

        tables.slugs.insert(product.slug().clone(), *product.id());
        tables.products.insert(*product.id(), product.clone());
        tracing::debug!(product_id = %product.id_typed(), slug = %product.slug(), "product created");
        Ok(product)
    }

    fn rename_product(&self, slug: &str, name: &str) -> StoreResult<Product> {
        let mut tables = self.write()?;
        let id = tables.product_id(slug)?;
        let mut product = tables
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("product {slug:?}")))?;
        let old_slug = product.slug().clone();

        let changed = {
            let taken = |candidate: &Slug| tables.slugs.get(candidate).is_some_and(|owner| *owner != id);
            product.rename(name, self.slugs.as_ref(), &taken)?
        };

        if changed {
            tables.slugs.remove(&old_slug);
            tables.slugs.insert(product.slug().clone(), id);
            tracing::debug!(product_id = %id, from = %old_slug, to = %product.slug(), "product slug regenerated");
        }
        tables.products.insert(id, product.clone());
        Ok(product)
    }

    fn attach_tag(&self, slug: &str, tag: &str) -> StoreResult<bool> {
        let mut tables = self.write()?;
        Ok(tables.product_mut(slug)?.attach_tag(tag)?)
    }

    fn add_review(
        &self,
        slug: &str,
        rating: Option<Rating>,
        body: Option<String>,
        created_at: DateTime<Utc>,
    ) -> StoreResult<Review> {
        let mut tables = self.write()?;
        let product_id = tables.product_id(slug)?;
        let review = Review::new(ReviewId::new(), product_id, rating, body, created_at);
        tables.reviews.entry(product_id).or_default().push(review.clone());
        tracing::debug!(product_id = %product_id, rating = ?rating.map(Rating::value), "review added");
        Ok(review)
    }

    fn attach_media(
        &self,
        slug: &str,
        collection: &str,
        name: &str,
        url: &str,
    ) -> StoreResult<MediaAttachment> {
        let mut tables = self.write()?;
        let product_id = tables.product_id(slug)?;
        let library = tables.media.entry(product_id).or_default();
        let attachment = library.attach(MediaId::new(), collection, name, url)?.clone();
        tracing::debug!(product_id = %product_id, collection, name, "media attached");
        Ok(attachment)
    }

    fn find_by_slug(&self, slug: &str, load: &ProductLoad) -> StoreResult<ResolvedProduct> {
        let tables = self.read()?;
        let id = tables.product_id(slug)?;
        let product = tables
            .products
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("product {slug:?}")))?;
        tables.resolve(product, load)
    }

    fn list(&self, load: &ProductLoad) -> StoreResult<Vec<ResolvedProduct>> {
        let tables = self.read()?;
        let mut products: Vec<&Product> = tables.products.values().collect();
        products.sort_by(|a, b| a.slug().cmp(b.slug()));
        products.into_iter().map(|p| tables.resolve(p, load)).collect()
    }
}
