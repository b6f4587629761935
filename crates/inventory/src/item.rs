use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bottlekeep_core::{Entity, ItemId, ValueObject};

use crate::container_size::ContainerSize;

/// Scanned product barcode.
///
/// The domain stores whatever integer it is given; the 12-digit rule is
/// enforced by the input layer before a value gets here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Barcode(u64);

impl Barcode {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Barcode {}

impl core::fmt::Display for Barcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Candidate fields for a new stocked item.
///
/// Ids and timestamps are assigned by the [`crate::Inventory`] at add time;
/// items are never constructed into it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub style: String,
    pub name: String,
    pub strength_percent: f64,
    pub size: ContainerSize,
    pub quantity: i64,
    pub barcode: Barcode,
}

/// Field updates for an edit.
///
/// `None` keeps the current value. Empty strings are treated the same as
/// `None` (the interactive caller maps a blank line to "keep").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub style: Option<String>,
    pub strength_percent: Option<f64>,
    pub size: Option<i64>,
    pub is_metric: Option<bool>,
    pub quantity: Option<i64>,
    pub barcode: Option<Barcode>,
}

/// A stocked item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    style: String,
    name: String,
    strength_percent: f64,
    size: ContainerSize,
    quantity: i64,
    barcode: Barcode,
    last_updated: DateTime<Utc>,
}

impl Item {
    pub(crate) fn from_candidate(id: ItemId, candidate: NewItem, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id,
            style: candidate.style,
            name: candidate.name,
            strength_percent: candidate.strength_percent,
            size: candidate.size,
            quantity: candidate.quantity,
            barcode: candidate.barcode,
            last_updated: occurred_at,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strength_percent(&self) -> f64 {
        self.strength_percent
    }

    pub fn size(&self) -> &ContainerSize {
        &self.size
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn barcode(&self) -> Barcode {
        self.barcode
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub(crate) fn set_style(&mut self, style: String) {
        self.style = style;
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_strength_percent(&mut self, strength_percent: f64) {
        self.strength_percent = strength_percent;
    }

    pub(crate) fn set_size(&mut self, size: ContainerSize) {
        self.size = size;
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub(crate) fn set_barcode(&mut self, barcode: Barcode) {
        self.barcode = barcode;
    }

    /// Refresh `last_updated`; called on every mutation.
    pub(crate) fn touch(&mut self, occurred_at: DateTime<Utc>) {
        self.last_updated = occurred_at;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> NewItem {
        NewItem {
            style: "IPA".to_string(),
            name: "Example IPA".to_string(),
            strength_percent: 6.5,
            size: ContainerSize::new(true, 355),
            quantity: 24,
            barcode: Barcode::new(123456),
        }
    }

    #[test]
    fn from_candidate_stamps_id_and_timestamp() {
        let at = Utc::now();
        let item = Item::from_candidate(ItemId::new(1), candidate(), at);
        assert_eq!(Entity::id(&item), &ItemId::new(1));
        assert_eq!(item.last_updated(), at);
        assert_eq!(item.name(), "Example IPA");
        assert_eq!(item.barcode().value(), 123456);
    }

    #[test]
    fn touch_refreshes_last_updated() {
        let at = Utc::now();
        let mut item = Item::from_candidate(ItemId::new(1), candidate(), at);
        let later = at + chrono::Duration::seconds(90);
        item.touch(later);
        assert_eq!(item.last_updated(), later);
        // identity is untouched by mutation
        assert_eq!(item.id_typed(), ItemId::new(1));
    }
}
