use std::io::Write;

use anyhow::Context;

use storefront_infra::{CatalogConfig, CatalogService, InMemoryCatalogStore, Seed, load_seed};

/// Load a JSON seed file into an in-memory catalog and print one product card
/// per line.
fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: storefront-cards <seed.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let seed = Seed::from_json(&raw).with_context(|| format!("invalid seed file {path}"))?;

    let config = CatalogConfig::from_env();
    let store = InMemoryCatalogStore::with_slug_generator(config.slug_generator());
    load_seed(&store, &seed)?;

    let service = CatalogService::new(store, config);
    let cards = service.cards()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for card in &cards {
        serde_json::to_writer(&mut out, card)?;
        writeln!(out)?;
    }

    tracing::info!(cards = cards.len(), "product cards written");
    Ok(())
}
