//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In the catalog the
/// normalized names (`BeerName`, `StyleName`) are value objects: two beer names typed
/// with different casing are the same value once normalized.
///
/// ```ignore
/// let a = BeerName::new("Trembling Giant");
/// let b = BeerName::new("TREMBLING giant");
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
