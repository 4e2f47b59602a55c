//! Read-side service: loads products with the relations a view needs and
//! shapes them for transport.

use tracing::instrument;

use storefront_catalog::{ProductCard, ProductLoad, RatingSummary, ResolvedProduct, Review};
use storefront_core::DomainError;

use crate::config::CatalogConfig;
use crate::store::{CatalogStore, StoreError, StoreResult};

#[derive(Debug)]
pub struct CatalogService<S> {
    store: S,
    config: CatalogConfig,
}

impl<S> CatalogService<S>
where
    S: CatalogStore,
{
    pub fn new(store: S, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Card for one product.
    #[instrument(skip(self), err)]
    pub fn card(&self, slug: &str) -> StoreResult<ProductCard> {
        let resolved = self.store.find_by_slug(slug, &ProductLoad::card())?;
        build_card(&resolved)
    }

    /// Cards for every product, ordered by slug.
    #[instrument(skip(self), err)]
    pub fn cards(&self) -> StoreResult<Vec<ProductCard>> {
        let products = self.store.list(&ProductLoad::card())?;
        let cards = products.iter().map(build_card).collect::<StoreResult<Vec<_>>>()?;
        tracing::debug!(count = cards.len(), "product cards built");
        Ok(cards)
    }

    /// Derived rating fields for one product.
    pub fn rating_summary(&self, slug: &str) -> StoreResult<RatingSummary> {
        let resolved = self.store.find_by_slug(slug, &ProductLoad::none().with_reviews())?;
        Ok(resolved.rating_summary()?)
    }

    /// Newest commented reviews, up to the configured limit.
    pub fn latest_reviews(&self, slug: &str) -> StoreResult<Vec<Review>> {
        let resolved = self.store.find_by_slug(slug, &ProductLoad::none().with_reviews())?;
        let latest = resolved.latest_commented_reviews(self.config.latest_reviews_limit)?;
        Ok(latest.into_iter().cloned().collect())
    }
}

fn build_card(resolved: &ResolvedProduct) -> StoreResult<ProductCard> {
    ProductCard::from_resolved(resolved).map_err(|err| {
        if let DomainError::MissingRelation(relation) = &err {
            tracing::warn!(
                slug = %resolved.product.slug(),
                relation = %relation,
                "product card requested without a required relation"
            );
        }
        StoreError::from(err)
    })
}
