//! Entity trait: records with identity (products, brands, reviews, media).

/// Something that is the same record across edits because its id stays fixed.
///
/// Stores key their tables by `Entity::id`; two products with equal names are
/// still different products.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
