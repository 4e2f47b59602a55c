//! Media attachments grouped into named, ordered collections.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, MediaId};

/// Collection holding a product's images.
pub const PRODUCT_MEDIA_COLLECTION: &str = "product";

/// A file attached to an entity. Storage lives elsewhere; only the resolved
/// URL is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub id: MediaId,
    pub collection: String,
    pub name: String,
    pub url: String,
    /// Position within the collection; lower sorts first.
    pub order: u32,
}

impl Entity for MediaAttachment {
    type Id = MediaId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The media attached to one entity, across all of its collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaLibrary {
    items: Vec<MediaAttachment>,
}

impl MediaLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<MediaAttachment>) -> Self {
        Self { items }
    }

    /// Attach a media item, placing it after everything already in its collection.
    pub fn attach(
        &mut self,
        id: MediaId,
        collection: &str,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> DomainResult<&MediaAttachment> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("media name cannot be empty"));
        }
        let order = self
            .items
            .iter()
            .filter(|m| m.collection == collection)
            .map(|m| m.order + 1)
            .max()
            .unwrap_or(0);

        let index = self.items.len();
        self.items.push(MediaAttachment {
            id,
            collection: collection.to_string(),
            name,
            url: url.into(),
            order,
        });
        Ok(&self.items[index])
    }

    /// Items of `collection`, in collection order.
    pub fn collection(&self, collection: &str) -> Vec<&MediaAttachment> {
        let mut items: Vec<&MediaAttachment> = self
            .items
            .iter()
            .filter(|m| m.collection == collection)
            .collect();
        items.sort_by_key(|m| m.order);
        items
    }

    /// Earliest-ordered item of `collection`.
    pub fn first(&self, collection: &str) -> Option<&MediaAttachment> {
        self.items
            .iter()
            .filter(|m| m.collection == collection)
            .min_by_key(|m| m.order)
    }

    /// URL of the first item of `collection`, or an empty string.
    pub fn first_url(&self, collection: &str) -> String {
        self.first(collection)
            .map(|m| m.url.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
