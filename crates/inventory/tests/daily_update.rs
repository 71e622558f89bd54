//! Black-box scenarios for the end-of-day update, driven only through the
//! crate's public API.

use shopkeep_inventory::{create_item, InventoryUpdater, MAX_QUALITY};

const PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

#[test]
fn quality_degrades_twice_as_fast_once_sell_by_date_has_passed() {
    let mut items = vec![create_item("TestItem", 0, 2), create_item("TestItem", 2, 2)];

    InventoryUpdater::new(&mut items).update_quality();

    assert_eq!(items[0].quality(), 0);
    assert_eq!(items[0].sell_in(), -1);
    assert_eq!(items[1].quality(), 1);
}

#[test]
fn expired_quality_never_drops_below_zero() {
    let mut items = vec![create_item("TestItem", 0, 0)];

    InventoryUpdater::new(&mut items).update_quality();

    assert_eq!(items[0].quality(), 0);
}

#[test]
fn sell_in_drops_by_one_per_update() {
    let mut items = vec![create_item("TestItem", 4, 0)];

    InventoryUpdater::new(&mut items).advance(10);

    assert_eq!(items[0].sell_in(), 4 - 10);
}

#[test]
fn aged_brie_gains_quality_as_it_ages() {
    let mut items = vec![create_item("Aged Brie", 10, 0)];

    InventoryUpdater::new(&mut items).advance(10);

    assert_eq!(items[0].quality(), 10);
    assert_eq!(items[0].sell_in(), 0);
}

#[test]
fn aged_brie_quality_never_exceeds_max() {
    let mut items = vec![create_item("Aged Brie", 10, 0)];

    InventoryUpdater::new(&mut items).advance(MAX_QUALITY as u32 + 1);

    assert_eq!(items[0].quality(), MAX_QUALITY);
}

#[test]
fn sulfuras_never_changes() {
    let mut items = vec![create_item("Sulfuras, Hand of Ragnaros", 10, 10)];

    InventoryUpdater::new(&mut items).update_quality();

    assert_eq!(items[0].sell_in(), 10);
    assert_eq!(items[0].quality(), 10);
}

#[test]
fn backstage_passes_gain_two_with_ten_to_six_days_left() {
    for day in 6..=10 {
        let mut items = vec![create_item(PASSES, day, 10)];

        InventoryUpdater::new(&mut items).update_quality();

        assert_eq!(items[0].quality(), 12, "sell_in = {day}");
    }
}

#[test]
fn backstage_passes_gain_three_with_five_or_fewer_days_left() {
    for day in 1..=5 {
        let mut items = vec![create_item(PASSES, day, 10)];

        InventoryUpdater::new(&mut items).update_quality();

        assert_eq!(items[0].quality(), 13, "sell_in = {day}");
    }
}

#[test]
fn backstage_passes_gain_one_when_event_is_far_off() {
    let mut items = vec![create_item(PASSES, 11, 10)];

    InventoryUpdater::new(&mut items).update_quality();

    assert_eq!(items[0].quality(), 11);
}

#[test]
fn backstage_passes_drop_to_zero_once_expired() {
    let mut items = vec![create_item(PASSES, 0, 10)];

    InventoryUpdater::new(&mut items).update_quality();

    assert_eq!(items[0].quality(), 0);
}

#[test]
fn classic_stock_after_two_days() {
    let mut items = vec![
        create_item("+5 Dexterity Vest", 10, 20),
        create_item("Aged Brie", 2, 0),
        create_item("Elixir of the Mongoose", 5, 7),
        create_item("Sulfuras, Hand of Ragnaros", 0, 80),
        create_item("Sulfuras, Hand of Ragnaros", -1, 80),
        create_item(PASSES, 15, 20),
        create_item(PASSES, 10, 49),
        create_item(PASSES, 5, 49),
    ];

    InventoryUpdater::new(&mut items).advance(2);

    let listing: Vec<String> = items.iter().map(ToString::to_string).collect();
    assert_eq!(
        listing,
        vec![
            "+5 Dexterity Vest, 8, 18",
            "Aged Brie, 0, 2",
            "Elixir of the Mongoose, 3, 5",
            "Sulfuras, Hand of Ragnaros, 0, 80",
            "Sulfuras, Hand of Ragnaros, -1, 80",
            "Backstage passes to a TAFKAL80ETC concert, 13, 22",
            "Backstage passes to a TAFKAL80ETC concert, 8, 50",
            "Backstage passes to a TAFKAL80ETC concert, 3, 50",
        ]
    );
}
