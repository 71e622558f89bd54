//! Runs the end-of-day update over the shop's stock and prints every day.

mod config;
mod report;

use shopkeep_inventory::{create_item, InventoryUpdater, Item, LEGENDARY_QUALITY};

use crate::config::SimConfig;

fn opening_stock() -> Vec<Item> {
    vec![
        create_item("+5 Dexterity Vest", 10, 20),
        create_item("Aged Brie", 2, 0),
        create_item("Elixir of the Mongoose", 5, 7),
        create_item("Sulfuras, Hand of Ragnaros", 0, LEGENDARY_QUALITY),
        create_item("Sulfuras, Hand of Ragnaros", -1, LEGENDARY_QUALITY),
        create_item("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        create_item("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        create_item("Backstage passes to a TAFKAL80ETC concert", 5, 49),
    ]
}

fn main() -> anyhow::Result<()> {
    shopkeep_observability::init();

    let config = SimConfig::from_env()?;
    tracing::info!(days = config.days, format = ?config.format, "starting simulation");

    let mut items = opening_stock();
    let mut out = std::io::stdout().lock();

    report::write_day(&mut out, config.format, 0, &items)?;

    let mut updater = InventoryUpdater::new(&mut items);
    for day in 1..=config.days {
        updater.update_quality();
        report::write_day(&mut out, config.format, day, updater.items())?;
    }

    tracing::info!("simulation finished");
    Ok(())
}
