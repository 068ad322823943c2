//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain objects with **no identity** - they are
/// defined entirely by their attribute values, and two value objects with the
/// same values are equal. Contrast with [`crate::Entity`], where the id alone
/// decides sameness.
///
/// To "modify" a value object, create a new one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
