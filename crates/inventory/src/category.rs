//! Item categories and name-based classification.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shopkeep_core::{DomainError, ValueObject};

/// Name of the aged cheese item.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Prefix shared by every event pass.
pub const BACKSTAGE_PASSES_PREFIX: &str = "Backstage passes";

/// Rule family an item belongs to.
///
/// Determined once from the item name when the item is built; the daily
/// update dispatches on this instead of comparing strings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality every day, twice as fast once expired.
    Ordinary,
    /// Gains quality every day, twice as fast once expired.
    AgedCheese,
    /// Never sold, never degrades.
    Legendary,
    /// Gains quality faster as the event approaches, worthless afterwards.
    EventPass,
}

impl ValueObject for Category {}

impl Category {
    /// Classify an item by its name.
    ///
    /// Unknown names fall back to [`Category::Ordinary`].
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedCheese,
            SULFURAS => Category::Legendary,
            n if n.starts_with(BACKSTAGE_PASSES_PREFIX) => Category::EventPass,
            _ => Category::Ordinary,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ordinary => "ordinary",
            Category::AgedCheese => "aged_cheese",
            Category::Legendary => "legendary",
            Category::EventPass => "event_pass",
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ordinary" => Ok(Category::Ordinary),
            "aged_cheese" => Ok(Category::AgedCheese),
            "legendary" => Ok(Category::Legendary),
            "event_pass" => Ok(Category::EventPass),
            other => Err(DomainError::validation(format!(
                "unknown item category `{other}`"
            ))),
        }
    }
}
