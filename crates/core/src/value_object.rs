//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// A `Rating` of 4 equals any other `Rating` of 4; a `Slug` is the same slug no
/// matter which product first claimed it.
///
/// Value objects are immutable: to "change" one, construct a new one. Their
/// constructors are the place to enforce validity (bounds, formats), so code
/// holding a value object never needs to re-check it.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Rating(u8);
///
/// impl ValueObject for Rating {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
