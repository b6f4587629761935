//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a stocked item.
///
/// Assigned by the inventory as a monotonically increasing sequence starting
/// at 1. Ids are never reused, even after the item is removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}
