//! Inventory domain module.
//!
//! This crate contains the business rules for the bottle inventory,
//! implemented purely as deterministic domain logic (no IO, no console,
//! no storage). The interactive menu lives in `bottlekeep-cli` and only
//! calls the operations exposed here.

pub mod breakage;
pub mod container_size;
pub mod inventory;
pub mod item;

pub use breakage::{BreakageCounter, BreakageEntry};
pub use container_size::ContainerSize;
pub use inventory::{Inventory, ItemAdded, ItemEdited, ItemRemoved, TOTAL_KEY};
pub use item::{Barcode, Item, ItemPatch, NewItem};
