use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bottlekeep_core::{DomainError, DomainResult, ItemId};

use crate::breakage::{BreakageCounter, BreakageEntry};
use crate::item::{Item, ItemPatch, NewItem};

/// Reserved key in the counts map holding the sum over all live items.
pub const TOTAL_KEY: &str = "Total";

/// Confirmation: item added to stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    /// True when the add happened under the sticky breakage flag and was
    /// therefore also recorded as damaged stock.
    pub breakage_flagged: bool,
}

/// Confirmation: item removed from stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
}

/// Confirmation: item fields updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEdited {
    pub id: ItemId,
    /// Name after the edit (edits may rename).
    pub name: String,
}

/// Aggregate root: the bottle inventory.
///
/// Owns the live item list, the per-name/total counts kept in lockstep with
/// it, and the breakage accounting. Single-threaded by design: one
/// interactive caller, every operation runs to completion, no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
    counts: BTreeMap<String, i64>,
    breakage_flagged: bool,
    flagged: Vec<BreakageEntry>,
    breakage: BreakageCounter,
    next_id: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            counts: BTreeMap::new(),
            breakage_flagged: false,
            flagged: Vec::new(),
            breakage: BreakageCounter::new(),
            next_id: 1,
        }
    }

    /// Add a candidate item to stock.
    ///
    /// Rejects non-positive quantities and names already live in the item
    /// list. On success the item gets the next sequential id (never reused)
    /// and the counts for its name and [`TOTAL_KEY`] go up by its quantity.
    /// Under the sticky breakage flag the add is additionally recorded as
    /// damaged stock; flagging never blocks an add.
    pub fn add(&mut self, candidate: NewItem, occurred_at: DateTime<Utc>) -> DomainResult<ItemAdded> {
        if candidate.quantity <= 0 {
            return Err(DomainError::invalid_quantity(candidate.quantity));
        }
        if self.items.iter().any(|item| item.name() == candidate.name) {
            return Err(DomainError::duplicate_name(candidate.name));
        }

        let id = ItemId::new(self.next_id);
        self.next_id += 1;

        let name = candidate.name.clone();
        let quantity = candidate.quantity;
        *self.counts.entry(name.clone()).or_insert(0) += quantity;
        *self.counts.entry(TOTAL_KEY.to_string()).or_insert(0) += quantity;
        self.items.push(Item::from_candidate(id, candidate, occurred_at));

        if self.breakage_flagged {
            self.flagged.push(BreakageEntry {
                name: name.clone(),
                quantity,
            });
            self.breakage.increment(quantity);
        }

        Ok(ItemAdded {
            id,
            name,
            quantity,
            breakage_flagged: self.breakage_flagged,
        })
    }

    /// Remove an item (the whole record) by id.
    ///
    /// The counts for its name and [`TOTAL_KEY`] are decremented by the
    /// removed quantity. Count keys are decremented, never deleted, so
    /// [`Inventory::exists`] stays true for a fully removed name.
    pub fn remove_by_id(&mut self, id: ItemId) -> DomainResult<ItemRemoved> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id_typed() == id)
            .ok_or_else(DomainError::not_found)?;
        let item = self.items.remove(pos);

        if let Some(count) = self.counts.get_mut(item.name()) {
            *count -= item.quantity();
        }
        if let Some(total) = self.counts.get_mut(TOTAL_KEY) {
            *total -= item.quantity();
        }

        Ok(ItemRemoved {
            id,
            name: item.name().to_string(),
            quantity: item.quantity(),
        })
    }

    /// Edit the item currently named `name`.
    ///
    /// Blank or absent string fields keep their current value; supplied
    /// numeric fields overwrite. Renaming into another live item's name is a
    /// conflict, a supplied negative quantity is invalid; both reject before
    /// anything mutates. The counts map is rebalanced so it keeps matching
    /// the live quantities, and `last_updated` is refreshed.
    pub fn edit(
        &mut self,
        name: &str,
        patch: ItemPatch,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<ItemEdited> {
        let pos = self
            .items
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(DomainError::not_found)?;

        let new_name = match patch.name.as_deref() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => name.to_string(),
        };
        if new_name != name && self.items.iter().any(|item| item.name() == new_name) {
            return Err(DomainError::conflict(format!(
                "an item named '{new_name}' already exists"
            )));
        }
        if let Some(quantity) = patch.quantity {
            if quantity < 0 {
                return Err(DomainError::invalid_quantity(quantity));
            }
        }

        let item = &mut self.items[pos];
        let old_quantity = item.quantity();

        item.set_name(new_name.clone());
        if let Some(style) = patch.style.filter(|s| !s.is_empty()) {
            item.set_style(style);
        }
        if let Some(strength) = patch.strength_percent {
            item.set_strength_percent(strength);
        }
        if patch.size.is_some() || patch.is_metric.is_some() {
            // Copy-then-replace; the unit flag and raw value overwrite
            // independently, without conversion.
            let mut size = *item.size();
            if let Some(metric) = patch.is_metric {
                size.set_is_metric(metric);
            }
            if let Some(value) = patch.size {
                size.set_size(value, false);
            }
            item.set_size(size);
        }
        if let Some(quantity) = patch.quantity {
            item.set_quantity(quantity);
        }
        if let Some(barcode) = patch.barcode {
            item.set_barcode(barcode);
        }
        item.touch(occurred_at);

        let id = item.id_typed();
        let new_quantity = item.quantity();

        // Rebalance so per-name counts and the total keep tracking the live
        // item list through renames and quantity changes.
        *self.counts.entry(name.to_string()).or_insert(0) -= old_quantity;
        *self.counts.entry(new_name.clone()).or_insert(0) += new_quantity;
        *self.counts.entry(TOTAL_KEY.to_string()).or_insert(0) += new_quantity - old_quantity;

        Ok(ItemEdited { id, name: new_name })
    }

    /// Turn on the sticky breakage flag. Idempotent; there is no unset.
    pub fn flag_breakage(&mut self) {
        self.breakage_flagged = true;
    }

    pub fn breakage_flagged(&self) -> bool {
        self.breakage_flagged
    }

    /// Live items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Adds recorded as damaged stock since breakage flagging began.
    pub fn flagged_breakage(&self) -> &[BreakageEntry] {
        &self.flagged
    }

    /// Running total of bottles recorded as broken.
    pub fn breakage_total(&self) -> i64 {
        self.breakage.total()
    }

    /// The full name-to-count map, including the [`TOTAL_KEY`] entry.
    pub fn counts_by_type(&self) -> &BTreeMap<String, i64> {
        &self.counts
    }

    /// Sum over all live items. `NotFound` until the first successful add
    /// creates the [`TOTAL_KEY`] entry.
    pub fn total_count(&self) -> DomainResult<i64> {
        self.counts
            .get(TOTAL_KEY)
            .copied()
            .ok_or_else(DomainError::not_found)
    }

    /// Whether a name has ever been stocked.
    ///
    /// Checks the counts map, whose keys are never deleted; this stays true
    /// after the last item of the name is removed. Duplicate rejection on
    /// add checks live items instead, so such a name can be re-added.
    pub fn exists(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }
}
