//! Inventory domain module: end-of-day stock updates.
//!
//! Pure, synchronous rules over caller-owned items (no IO, no storage).
//! Each call to [`update_quality`] ages every item by exactly one day.

pub mod category;
pub mod item;
pub mod rules;
pub mod updater;

pub use category::Category;
pub use item::{create_item, Item};
pub use rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use updater::{update_quality, InventoryUpdater};
