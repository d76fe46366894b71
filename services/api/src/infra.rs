use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use pawplan::catalog::RecipeCatalog;
use pawplan::config::PricingConfig;
use pawplan::error::AppError;
use pawplan::plans::{PlanId, PlanQuoter, PlanRecord, PlanRepository, RepositoryError};
use pawplan::pricing::PriceTable;
use pawplan::recommendation::RecommendationEngine;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Insertion-ordered plan store backing the service until checkout persistence lands.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPlanRepository {
    records: Arc<Mutex<Vec<PlanRecord>>>,
}

impl PlanRepository for InMemoryPlanRepository {
    fn insert(&self, record: PlanRecord) -> Result<PlanRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &PlanId) -> Result<Option<PlanRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<PlanRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

/// Quoter wired with the configured discounts and, when present, an imported price table.
///
/// `price_table` takes precedence over `PAWPLAN_PRICE_TABLE`.
pub(crate) fn build_quoter(
    pricing: &PricingConfig,
    price_table: Option<&Path>,
) -> Result<PlanQuoter, AppError> {
    let prices = match price_table.or(pricing.price_table.as_deref()) {
        Some(path) => {
            let table = PriceTable::from_path(path)?;
            tracing::info!(
                path = %path.display(),
                entries = table.entries().len(),
                "loaded price table"
            );
            table
        }
        None => PriceTable::standard(),
    };

    Ok(PlanQuoter::new(
        RecipeCatalog::standard(),
        prices,
        RecommendationEngine::default(),
        pricing.discounts,
    ))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parse a snake_case domain enum (activity level, portion, unit) from a CLI flag.
pub(crate) fn parse_variant<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let value = serde_json::Value::String(raw.trim().to_ascii_lowercase());
    serde_json::from_value(value).map_err(|err| format!("unrecognised value '{raw}' ({err})"))
}
