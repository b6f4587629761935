//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `ContainerSize { is_metric: true, size: 355 }` is a value object
/// - `Item { id: ItemId(...), name: "..." }` is an entity
///
/// Value objects are "modified" by replacement: the edit flow copies the
/// current value, adjusts it, and writes the whole value back.
///
/// The trait requires:
/// - **Clone**: Value objects should be cheap to copy (they're values, not references)
/// - **PartialEq**: Value objects are compared by their attribute values
/// - **Debug**: Value objects should be debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
