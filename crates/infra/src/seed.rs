//! JSON seed files for populating a catalog store.
//!
//! Products reference their brand and category by name; reviews and media are
//! nested under the product they belong to.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use storefront_catalog::{Brand, Category, NewProduct, PRODUCT_MEDIA_COLLECTION, Rating};
use storefront_core::{BrandId, CategoryId, DomainError};

use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("product {product:?} references unknown brand {brand:?}")]
    UnknownBrand { product: String, brand: String },

    #[error("product {product:?} references unknown category {category:?}")]
    UnknownCategory { product: String, category: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DomainError> for SeedError {
    fn from(value: DomainError) -> Self {
        Self::Store(StoreError::Domain(value))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub products: Vec<SeedProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    pub brand: String,
    pub category: String,
    pub price: u64,
    #[serde(default)]
    pub old_price: Option<u64>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub media: Vec<SeedMedia>,
    #[serde(default)]
    pub reviews: Vec<SeedReview>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedMedia {
    pub name: String,
    pub url: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_collection() -> String {
    PRODUCT_MEDIA_COLLECTION.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedReview {
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load `seed` into `store`. Returns the number of products created.
pub fn load_seed<S: CatalogStore>(store: &S, seed: &Seed) -> Result<usize, SeedError> {
    for name in &seed.brands {
        store.insert_brand(Brand::new(BrandId::new(), name.as_str())?)?;
    }
    for name in &seed.categories {
        store.insert_category(Category::new(CategoryId::new(), name.as_str())?)?;
    }

    for item in &seed.products {
        let brand = store
            .find_brand_by_name(&item.brand)?
            .ok_or_else(|| SeedError::UnknownBrand {
                product: item.name.clone(),
                brand: item.brand.clone(),
            })?;
        let category = store
            .find_category_by_name(&item.category)?
            .ok_or_else(|| SeedError::UnknownCategory {
                product: item.name.clone(),
                category: item.category.clone(),
            })?;

        let product = store.create_product(NewProduct {
            name: item.name.clone(),
            sku: item.sku.clone(),
            description: item.description.clone(),
            category_id: category.id,
            brand_id: brand.id,
            price: item.price,
            old_price: item.old_price,
            quantity: item.quantity,
        })?;
        let slug = product.route_key();

        for tag in &item.tags {
            store.attach_tag(slug, tag)?;
        }
        for media in &item.media {
            store.attach_media(slug, &media.collection, &media.name, &media.url)?;
        }
        for review in &item.reviews {
            store.add_review(slug, review.rating, review.body.clone(), review.created_at)?;
        }
    }

    tracing::info!(
        brands = seed.brands.len(),
        categories = seed.categories.len(),
        products = seed.products.len(),
        "catalog seeded"
    );
    Ok(seed.products.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCatalogStore;
    use storefront_catalog::ProductLoad;

    const SEED: &str = r#"{
        "brands": ["Acme"],
        "categories": ["Kitchen"],
        "products": [{
            "name": "Steel Kettle",
            "sku": "KET-01",
            "brand": "Acme",
            "category": "Kitchen",
            "price": 4999,
            "tags": ["sale"],
            "media": [{"name": "front.jpg", "url": "https://cdn/front.jpg"}],
            "reviews": [
                {"rating": 5, "body": "Boils fast", "created_at": "2024-03-01T12:00:00Z"},
                {"created_at": "2024-03-02T12:00:00Z"}
            ]
        }]
    }"#;

    #[test]
    fn seed_populates_store() {
        let store = InMemoryCatalogStore::new();
        let seed = Seed::from_json(SEED).unwrap();
        assert_eq!(load_seed(&store, &seed).unwrap(), 1);

        let resolved = store.find_by_slug("steel-kettle", &ProductLoad::card()).unwrap();
        assert!(resolved.product.has_tag("sale"));
        assert_eq!(resolved.reviews().unwrap().len(), 2);
        assert_eq!(resolved.media().unwrap().first(PRODUCT_MEDIA_COLLECTION).unwrap().name, "front.jpg");
    }

    #[test]
    fn unknown_brand_is_reported() {
        let store = InMemoryCatalogStore::new();
        let seed = Seed::from_json(&SEED.replace(r#""brands": ["Acme"]"#, r#""brands": []"#)).unwrap();
        match load_seed(&store, &seed).unwrap_err() {
            SeedError::UnknownBrand { brand, .. } => assert_eq!(brand, "Acme"),
            other => panic!("Expected UnknownBrand, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_rating_fails_to_parse() {
        let err = Seed::from_json(&SEED.replace(r#""rating": 5"#, r#""rating": 7"#)).unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }
}
