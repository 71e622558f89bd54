//! End-of-day inventory update.

use crate::item::Item;

/// Advance every item in `items` by one day, in place, in list order.
pub fn update_quality(items: &mut [Item]) {
    let span = tracing::debug_span!("update_quality", items = items.len());
    let _enter = span.enter();

    for item in items.iter_mut() {
        item.advance_day();
    }
}

/// Applies the daily rules to a caller-owned stock list.
///
/// Items stay owned by the caller; once the updater is dropped they can be
/// inspected directly.
#[derive(Debug)]
pub struct InventoryUpdater<'a> {
    items: &'a mut [Item],
}

impl<'a> InventoryUpdater<'a> {
    pub fn new(items: &'a mut [Item]) -> Self {
        Self { items }
    }

    /// Advance all items by one simulated day.
    pub fn update_quality(&mut self) {
        update_quality(&mut *self.items);
    }

    /// Run `days` consecutive daily updates.
    pub fn advance(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    pub fn items(&self) -> &[Item] {
        &*self.items
    }
}
