use crate::types::Record;
use anyhow::{Context, Result};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).context("serializing report")?;
    std::fs::write(path, s).with_context(|| format!("writing {}", path))?;
    Ok(())
}

/// Print up to `max_rows` rows as a markdown table.
pub fn preview_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

/// Plain per-record listing, used when no grouping was requested.
pub fn preview_records(records: &[Record], max_rows: usize) {
    for r in records.iter().take(max_rows) {
        println!(
            "ID: {}, District: {} (ID: {}), Year: {}, Month: {}, Day: {}, Value: {}",
            r.id, r.district_name, r.district_id, r.year, r.month, r.day, r.value
        );
    }
}
