//! Daily listing output.

use std::io::Write;

use shopkeep_inventory::Item;

use crate::config::ReportFormat;

pub fn write_day(
    out: &mut impl Write,
    format: ReportFormat,
    day: u32,
    items: &[Item],
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => {
            writeln!(out, "-------- day {day} --------")?;
            writeln!(out, "name, sellIn, quality")?;
            for item in items {
                writeln!(out, "{item}")?;
            }
            writeln!(out)?;
        }
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
