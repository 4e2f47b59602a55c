//! End-to-end: seed a store, serve cards, and check the JSON payload shape.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde_json::json;

use storefront_catalog::{Buyable, ProductLoad, Rating};
use storefront_infra::{CatalogConfig, CatalogService, CatalogStore, InMemoryCatalogStore, Seed, load_seed};

const SEED: &str = r#"{
    "brands": ["Acme", "Northwind"],
    "categories": ["Kitchen", "Garden"],
    "products": [
        {
            "name": "Steel Kettle",
            "sku": "KET-01",
            "description": "1.7L brushed steel",
            "brand": "Acme",
            "category": "Kitchen",
            "price": 4999,
            "old_price": 5999,
            "quantity": 12,
            "media": [
                {"name": "front.jpg", "url": "https://cdn.example.test/kettle/front.jpg"},
                {"name": "side.jpg", "url": "https://cdn.example.test/kettle/side.jpg"}
            ],
            "reviews": [
                {"rating": 4, "body": "Solid", "created_at": "2024-03-01T09:00:00Z"},
                {"rating": 5, "created_at": "2024-03-02T09:00:00Z"},
                {"rating": 5, "body": "Love it", "created_at": "2024-03-03T09:00:00Z"}
            ]
        },
        {
            "name": "Garden Hose",
            "sku": "HOS-20",
            "brand": "Northwind",
            "category": "Garden",
            "price": 2500
        }
    ]
}"#;

fn seeded_service() -> CatalogService<Arc<InMemoryCatalogStore>> {
    let store = Arc::new(InMemoryCatalogStore::new());
    let seed = Seed::from_json(SEED).unwrap();
    load_seed(&store, &seed).unwrap();
    CatalogService::new(store, CatalogConfig::default())
}

#[test]
fn cards_are_served_flat_and_ordered_by_slug() {
    let service = seeded_service();
    let cards = service.cards().unwrap();
    let slugs: Vec<&str> = cards.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["garden-hose", "steel-kettle"]);

    let kettle = serde_json::to_value(&cards[1]).unwrap();
    assert_eq!(kettle["name"], "Steel Kettle");
    assert_eq!(kettle["sku"], "KET-01");
    assert_eq!(kettle["description"], "1.7L brushed steel");
    assert_eq!(kettle["category_name"], "Kitchen");
    assert_eq!(kettle["brand_name"], "Acme");
    assert_eq!(kettle["price"], 4999);
    assert_eq!(kettle["old_price"], 5999);
    assert_eq!(kettle["first_media"], "https://cdn.example.test/kettle/front.jpg");
    assert_eq!(kettle["first_media_name"], "front.jpg");
    assert_eq!(kettle["rating"], json!(4.7));
    assert_eq!(kettle["avg_rating"], json!(4.7));
    assert_eq!(kettle["rating_count"], 3);

    let hose = serde_json::to_value(&cards[0]).unwrap();
    assert_eq!(hose["first_media"], "");
    assert!(hose["first_media_name"].is_null());
    assert!(hose["rating"].is_null());
    assert!(hose["avg_rating"].is_null());
    assert_eq!(hose["rating_count"], 0);
    assert!(hose["old_price"].is_null());
    assert!(hose["description"].is_null());
}

#[test]
fn new_reviews_change_ratings_on_next_read() {
    let service = seeded_service();
    service
        .store()
        .add_review(
            "garden-hose",
            Some(Rating::new(2).unwrap()),
            Some("Kinks easily".to_string()),
            Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap(),
        )
        .unwrap();
    service
        .store()
        .add_review("garden-hose", None, Some("Arrived late".to_string()), Utc::now())
        .unwrap();

    let card = service.card("garden-hose").unwrap();
    assert_eq!(card.rating, Some(2.0));
    assert_eq!(card.rating_count, 2);

    let summary = service.rating_summary("garden-hose").unwrap();
    assert_eq!(summary.histogram.get(&2), Some(&1));
    assert_eq!(summary.histogram.len(), 1);
}

#[test]
fn latest_reviews_skip_rating_only_reviews() {
    let service = seeded_service();
    let latest = service.latest_reviews("steel-kettle").unwrap();
    let bodies: Vec<&str> = latest.iter().filter_map(|r| r.body()).collect();
    assert_eq!(bodies, vec!["Love it", "Solid"]);
}

#[test]
fn renamed_product_is_served_under_new_slug() {
    let service = seeded_service();
    service.store().rename_product("steel-kettle", "Copper Kettle").unwrap();

    assert!(service.card("steel-kettle").unwrap_err().is_not_found());
    let card = service.card("copper-kettle").unwrap();
    assert_eq!(card.name, "Copper Kettle");
    assert_eq!(card.rating_count, 3);
}

#[test]
fn products_are_buyable_by_slug() {
    let service = seeded_service();
    let resolved = service
        .store()
        .find_by_slug("steel-kettle", &ProductLoad::none())
        .unwrap();
    let product = &resolved.product;
    assert_eq!(product.buyable_identifier(), "steel-kettle");
    assert_eq!(product.buyable_description(), "Steel Kettle");
    assert_eq!(product.buyable_price(), 4999);
    assert_eq!(product.buyable_weight(), 0);
    assert!(product.is_discounted());
}
