use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::rules;

/// A stock item on the shelf.
///
/// The category is derived from `name` at construction and cached; `name` is
/// read-only afterwards so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
    category: Category,
}

/// Wire shape accepted on deserialization; the category is always re-derived.
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

/// Build an item from caller-supplied fields. No validation is performed.
pub fn create_item(name: impl Into<String>, sell_in: i32, quality: i32) -> Item {
    Item::new(name, sell_in, quality)
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::classify(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Age the item by one day according to its category's rule.
    ///
    /// Legendary items are left untouched.
    pub fn advance_day(&mut self) {
        if self.category.is_legendary() {
            return;
        }

        let before = (self.sell_in, self.quality);
        let next = rules::next_day(self.category, self.sell_in, self.quality);
        self.sell_in = next.sell_in;
        self.quality = next.quality;

        tracing::trace!(
            item = %self.name,
            category = %self.category,
            sell_in_before = before.0,
            quality_before = before.1,
            sell_in = self.sell_in,
            quality = self.quality,
            "item advanced one day"
        );
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
