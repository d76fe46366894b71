use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use super::parser::parse_entries;
use super::PriceTableError;
use crate::catalog::{normalize_slug, Recipe};
use crate::nutrition::portions::PortionLine;

/// Daily price for a recipe across a band of body weights, `[min_lb, max_lb)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub recipe: String,
    pub min_lb: f64,
    pub max_lb: Option<f64>,
    /// Price of a full day's food at this band.
    pub daily_cents: u32,
    /// Identifier of the matching price object at the payment provider.
    pub price_id: Option<String>,
}

impl PriceEntry {
    pub fn contains(&self, weight_lb: f64) -> bool {
        weight_lb >= self.min_lb && self.max_lb.map_or(true, |max| weight_lb < max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceSource {
    Table { price_id: Option<String> },
    PerGram,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub recipe: String,
    pub daily_cents: u64,
    pub source: PriceSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    entries: Vec<PriceEntry>,
}

impl PriceTable {
    pub fn new(entries: Vec<PriceEntry>) -> Result<Self, PriceTableError> {
        let mut normalized = Vec::with_capacity(entries.len());
        for mut entry in entries {
            entry.recipe = normalize_slug(&entry.recipe);
            let band_ok = entry.min_lb.is_finite()
                && entry.min_lb >= 0.0
                && entry
                    .max_lb
                    .map_or(true, |max| max.is_finite() && max > entry.min_lb);
            if entry.recipe.is_empty() || !band_ok {
                return Err(PriceTableError::InvalidBand {
                    recipe: entry.recipe,
                    min_lb: entry.min_lb,
                    max_lb: entry.max_lb,
                });
            }
            normalized.push(entry);
        }
        Ok(Self {
            entries: normalized,
        })
    }

    /// Published full-meal prices. Lamb is priced per gram.
    pub fn standard() -> Self {
        let bands: [(f64, Option<f64>); 4] = [
            (0.0, Some(20.0)),
            (20.0, Some(50.0)),
            (50.0, Some(90.0)),
            (90.0, None),
        ];
        let prices: [(&str, [u32; 4]); 4] = [
            ("beef", [250, 450, 700, 950]),
            ("chicken", [220, 400, 620, 850]),
            ("turkey", [220, 400, 620, 850]),
            ("pork", [235, 425, 660, 900]),
        ];

        let entries = prices
            .iter()
            .flat_map(|(recipe, daily)| {
                bands
                    .iter()
                    .zip(daily.iter())
                    .enumerate()
                    .map(move |(band, ((min_lb, max_lb), cents))| PriceEntry {
                        recipe: recipe.to_string(),
                        min_lb: *min_lb,
                        max_lb: *max_lb,
                        daily_cents: *cents,
                        price_id: Some(format!("price_{recipe}_band{}", band + 1)),
                    })
            })
            .collect();

        Self { entries }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PriceTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PriceTableError> {
        let entries = parse_entries(reader)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    pub fn lookup(&self, recipe: &str, weight_lb: f64) -> Option<&PriceEntry> {
        let key = normalize_slug(recipe);
        self.entries
            .iter()
            .find(|entry| entry.recipe == key && entry.contains(weight_lb))
    }

    /// Price one portion line for a dog of `weight_lb`.
    ///
    /// Table prices cover a full day of one recipe and are scaled by the line's
    /// calorie share; otherwise the recipe's per-100g price is applied to the grams.
    pub fn resolve(&self, recipe: &Recipe, weight_lb: f64, line: &PortionLine) -> PriceQuote {
        match self.lookup(&recipe.slug, weight_lb) {
            Some(entry) => PriceQuote {
                recipe: recipe.slug.clone(),
                daily_cents: round_cents(f64::from(entry.daily_cents) * line.calorie_share),
                source: PriceSource::Table {
                    price_id: entry.price_id.clone(),
                },
            },
            None => PriceQuote {
                recipe: recipe.slug.clone(),
                daily_cents: round_cents(
                    f64::from(recipe.price_per_100g_cents) * line.grams_per_day / 100.0,
                ),
                source: PriceSource::PerGram,
            },
        }
    }
}

fn round_cents(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        (value + 0.5).floor() as u64
    } else {
        0
    }
}
