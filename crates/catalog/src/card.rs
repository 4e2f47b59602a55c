//! Flat product card used by list and grid views.

use serde::Serialize;

use storefront_core::{DomainResult, ProductId};

use crate::media::PRODUCT_MEDIA_COLLECTION;
use crate::rating::RatingSummary;
use crate::resolved::ResolvedProduct;
use crate::slug::Slug;

/// Presentation record for one product, serialized without a wrapping key.
///
/// `rating` and `avg_rating` always hold the same value; consumers read either.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub slug: Slug,
    pub sku: String,
    pub description: Option<String>,
    pub category_name: String,
    pub price: u64,
    pub old_price: Option<u64>,
    pub brand_name: String,
    /// URL of the first product image, empty when there is none.
    pub first_media: String,
    pub first_media_name: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: u64,
    pub avg_rating: Option<f64>,
}

impl ProductCard {
    /// Build a card from a resolved product and its already computed ratings.
    ///
    /// Fails with `MissingRelation` if brand, category or media were not loaded.
    pub fn build(resolved: &ResolvedProduct, ratings: &RatingSummary) -> DomainResult<Self> {
        let category = resolved.category()?;
        let brand = resolved.brand()?;
        let media = resolved.media()?;
        let first = media.first(PRODUCT_MEDIA_COLLECTION);
        let product = &resolved.product;
        let pricing = product.pricing();

        Ok(Self {
            id: product.id_typed(),
            name: product.name().to_string(),
            slug: product.slug().clone(),
            sku: product.sku().to_string(),
            description: product.description().map(str::to_string),
            category_name: category.name.clone(),
            price: pricing.price,
            old_price: pricing.old_price,
            brand_name: brand.name.clone(),
            first_media: first.map(|m| m.url.clone()).unwrap_or_default(),
            first_media_name: first.map(|m| m.name.clone()),
            rating: ratings.average,
            rating_count: ratings.count,
            avg_rating: ratings.average,
        })
    }

    /// Build a card, computing ratings from the loaded reviews.
    pub fn from_resolved(resolved: &ResolvedProduct) -> DomainResult<Self> {
        let ratings = resolved.rating_summary()?;
        Self::build(resolved, &ratings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaAttachment, MediaLibrary};
    use crate::product::{NewProduct, Product};
    use crate::reference::{Brand, Category};
    use crate::review::{Rating, Review};
    use crate::slug::SuffixSlugGenerator;
    use chrono::Utc;
    use storefront_core::{BrandId, CategoryId, DomainError, MediaId, ReviewId};

    fn resolved(media: Vec<MediaAttachment>, ratings: &[Option<u8>]) -> ResolvedProduct {
        let brand = Brand::new(BrandId::new(), "Acme").unwrap();
        let category = Category::new(CategoryId::new(), "Kitchen").unwrap();
        let product = Product::create(
            ProductId::new(),
            NewProduct {
                name: "Steel Kettle".to_string(),
                sku: "KET-01".to_string(),
                description: Some("1.7L brushed steel".to_string()),
                category_id: category.id,
                brand_id: brand.id,
                price: 4_999,
                old_price: Some(5_999),
                quantity: 3,
            },
            &SuffixSlugGenerator::default(),
            &|_| false,
        )
        .unwrap();
        let reviews = ratings
            .iter()
            .map(|r| {
                Review::new(
                    ReviewId::new(),
                    product.id_typed(),
                    r.map(|v| Rating::new(v).unwrap()),
                    None,
                    Utc::now(),
                )
            })
            .collect();

        ResolvedProduct::new(product)
            .with_brand(brand)
            .with_category(category)
            .with_media(MediaLibrary::from_items(media))
            .with_reviews(reviews)
    }

    fn image(name: &str, order: u32) -> MediaAttachment {
        MediaAttachment {
            id: MediaId::new(),
            collection: PRODUCT_MEDIA_COLLECTION.to_string(),
            name: name.to_string(),
            url: format!("https://cdn.example.test/products/{name}"),
            order,
        }
    }

    #[test]
    fn card_flattens_product_relations_and_ratings() {
        let card = ProductCard::from_resolved(&resolved(
            vec![image("front.jpg", 0)],
            &[Some(4), Some(5), Some(5)],
        ))
        .unwrap();

        assert_eq!(card.name, "Steel Kettle");
        assert_eq!(card.slug.as_str(), "steel-kettle");
        assert_eq!(card.sku, "KET-01");
        assert_eq!(card.category_name, "Kitchen");
        assert_eq!(card.brand_name, "Acme");
        assert_eq!(card.price, 4_999);
        assert_eq!(card.old_price, Some(5_999));
        assert_eq!(card.first_media, "https://cdn.example.test/products/front.jpg");
        assert_eq!(card.first_media_name.as_deref(), Some("front.jpg"));
        assert_eq!(card.rating, Some(4.7));
        assert_eq!(card.avg_rating, card.rating);
        assert_eq!(card.rating_count, 3);
    }

    #[test]
    fn card_without_media_has_empty_first_media() {
        let card = ProductCard::from_resolved(&resolved(vec![], &[])).unwrap();
        assert_eq!(card.first_media, "");
        assert_eq!(card.first_media_name, None);
        assert_eq!(card.rating, None);
        assert_eq!(card.avg_rating, None);
        assert_eq!(card.rating_count, 0);
    }

    #[test]
    fn media_outside_the_product_collection_is_ignored() {
        let mut manual = image("guide.pdf", 0);
        manual.collection = "manuals".to_string();
        let card = ProductCard::from_resolved(&resolved(vec![manual], &[])).unwrap();
        assert_eq!(card.first_media_name, None);
    }

    #[test]
    fn rating_count_includes_unrated_reviews() {
        let card = ProductCard::from_resolved(&resolved(vec![], &[Some(4), None])).unwrap();
        assert_eq!(card.rating_count, 2);
        assert_eq!(card.rating, Some(4.0));
    }

    #[test]
    fn missing_category_is_an_error() {
        let mut product = resolved(vec![], &[]);
        product.category = None;
        match ProductCard::from_resolved(&product).unwrap_err() {
            DomainError::MissingRelation(relation) => assert_eq!(relation, "category"),
            other => panic!("Expected MissingRelation, got {other:?}"),
        }
    }

    #[test]
    fn missing_brand_is_an_error() {
        let mut product = resolved(vec![], &[]);
        product.brand = None;
        match ProductCard::from_resolved(&product).unwrap_err() {
            DomainError::MissingRelation(relation) => assert_eq!(relation, "brand"),
            other => panic!("Expected MissingRelation, got {other:?}"),
        }
    }

    #[test]
    fn serializes_flat_with_both_rating_keys() {
        let card = ProductCard::from_resolved(&resolved(vec![image("front.jpg", 0)], &[Some(5), Some(3)]))
            .unwrap();
        let json = serde_json::to_value(&card).unwrap();
        let object = json.as_object().unwrap();

        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        let mut expected = vec![
            "id", "name", "slug", "sku", "description", "category_name", "price", "old_price",
            "brand_name", "first_media", "first_media_name", "rating", "rating_count", "avg_rating",
        ];
        let mut sorted_keys = keys.clone();
        sorted_keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(sorted_keys, expected);

        assert_eq!(json["slug"], "steel-kettle");
        assert_eq!(json["rating"], serde_json::json!(4.0));
        assert_eq!(json["avg_rating"], json["rating"]);
        assert_eq!(json["first_media_name"], "front.jpg");
    }

    #[test]
    fn unrated_card_serializes_null_rating() {
        let card = ProductCard::from_resolved(&resolved(vec![], &[])).unwrap();
        let json = serde_json::to_value(&card).unwrap();
        assert!(json["rating"].is_null());
        assert!(json["avg_rating"].is_null());
        assert!(json["first_media_name"].is_null());
        assert_eq!(json["first_media"], "");
    }
}
