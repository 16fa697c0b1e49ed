//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attribute values are equal. To "modify" one, build
/// a new one. A product on an order line is a value object; the order that
/// carries it is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
