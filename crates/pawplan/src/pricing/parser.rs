use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::table::PriceEntry;
use crate::catalog::normalize_slug;

pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<PriceEntry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<PriceRow>() {
        let row = record?;
        entries.push(PriceEntry {
            recipe: normalize_slug(&row.recipe),
            min_lb: row.min_lb,
            max_lb: row.max_lb,
            daily_cents: row.daily_cents,
            price_id: row.price_id,
        });
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    recipe: String,
    min_lb: f64,
    #[serde(default)]
    max_lb: Option<f64>,
    daily_cents: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    price_id: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
