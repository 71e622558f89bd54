//! One-day rule table, per category.
//!
//! Every rule reads the `sell_in` held at the start of the day: an item is
//! "expired" for today's update when `sell_in <= 0` before the decrement.

use crate::category::Category;

/// Upper quality bound for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// Lower quality bound for every non-legendary item.
pub const MIN_QUALITY: i32 = 0;

/// Quality a legendary item is conventionally stocked with. Never enforced.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Event passes gain +2 per day once `sell_in` is at or below this.
pub const EVENT_PASS_CLOSE_DAYS: i32 = 10;

/// Event passes gain +3 per day once `sell_in` is at or below this.
pub const EVENT_PASS_IMMINENT_DAYS: i32 = 5;

/// Item state after one elapsed day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DayOutcome {
    pub sell_in: i32,
    pub quality: i32,
}

/// Compute the next `(sell_in, quality)` for an item of `category`.
pub fn next_day(category: Category, sell_in: i32, quality: i32) -> DayOutcome {
    let expired = sell_in <= 0;

    let quality = match category {
        Category::Legendary => return DayOutcome { sell_in, quality },
        Category::Ordinary => clamp_quality(quality.saturating_add(if expired { -2 } else { -1 })),
        Category::AgedCheese => clamp_quality(quality.saturating_add(if expired { 2 } else { 1 })),
        Category::EventPass if expired => MIN_QUALITY,
        Category::EventPass => clamp_quality(quality.saturating_add(event_pass_gain(sell_in))),
    };

    DayOutcome {
        sell_in: sell_in.saturating_sub(1),
        quality,
    }
}

/// Daily gain of an unexpired event pass (`sell_in >= 1`).
fn event_pass_gain(sell_in: i32) -> i32 {
    if sell_in <= EVENT_PASS_IMMINENT_DAYS {
        3
    } else if sell_in <= EVENT_PASS_CLOSE_DAYS {
        2
    } else {
        1
    }
}

fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
