//! Entity trait: identity + continuity across state changes.
//!
//! An item stays the same entity through edits (renames included); only its
//! id ties the record together.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, which never changes once assigned.
    fn id(&self) -> &Self::Id;
}
