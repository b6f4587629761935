use serde::{Deserialize, Serialize};

use bottlekeep_core::ValueObject;

/// Running total of bottles recorded as broken.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakageCounter {
    total: i64,
}

impl BreakageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn increment(&mut self, amount: i64) {
        self.total += amount;
    }
}

/// One add recorded while breakage was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakageEntry {
    pub name: String,
    pub quantity: i64,
}

impl ValueObject for BreakageEntry {}
