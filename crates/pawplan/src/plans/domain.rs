use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::nutrition::energy::EnergyRequirement;
use crate::nutrition::portions::{MealPortion, DEFAULT_MEALS_PER_DAY};
use crate::nutrition::profile::DogProfile;
use crate::pricing::{DiscountLine, PriceSource};

pub const DEFAULT_CADENCE_WEEKS: u8 = 2;
pub const MAX_CADENCE_WEEKS: u8 = 8;
pub const MAX_RECIPES_PER_DOG: usize = 3;
/// How many upcoming deliveries a quote lists when a start date is given.
pub const SCHEDULE_PREVIEW: usize = 3;

/// Identifier wrapper for saved plans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub String);

/// What the customer configured in the plan builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub dogs: Vec<DogPlanRequest>,
    #[serde(default = "default_cadence")]
    pub cadence_weeks: u8,
    #[serde(default)]
    pub first_box: bool,
    #[serde(default)]
    pub start_on: Option<NaiveDate>,
}

fn default_cadence() -> u8 {
    DEFAULT_CADENCE_WEEKS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogPlanRequest {
    pub profile: DogProfile,
    /// Recipe slugs; empty means "use the recommendations".
    #[serde(default)]
    pub recipes: Vec<String>,
    #[serde(default)]
    pub portion: MealPortion,
    #[serde(default = "default_meals")]
    pub meals_per_day: u8,
}

fn default_meals() -> u8 {
    DEFAULT_MEALS_PER_DAY
}

impl DogPlanRequest {
    pub fn new(profile: DogProfile) -> Self {
        Self {
            profile,
            recipes: Vec::new(),
            portion: MealPortion::Full,
            meals_per_day: DEFAULT_MEALS_PER_DAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionQuote {
    pub recipe: String,
    pub recipe_name: String,
    pub kcal_per_day: f64,
    pub grams_per_day: f64,
    pub grams_per_meal: f64,
    pub daily_cents: u64,
    pub price_source: PriceSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogQuote {
    pub dog: String,
    pub portion: MealPortion,
    pub meals_per_day: u8,
    /// True when the recipes were picked by the recommender rather than the customer.
    pub recommended: bool,
    pub energy: EnergyRequirement,
    pub portions: Vec<PortionQuote>,
    pub grams_per_day: f64,
    pub daily_cents: u64,
    pub delivery_cents: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanQuote {
    pub cadence_weeks: u8,
    pub first_box: bool,
    pub dogs: Vec<DogQuote>,
    pub subtotal_cents: u64,
    pub discounts: Vec<DiscountLine>,
    pub total_cents: u64,
    pub price_per_day_cents: u64,
    pub grams_per_delivery: f64,
    pub pounds_per_delivery: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delivery_schedule: Vec<NaiveDate>,
}

impl PlanQuote {
    pub fn discount_cents(&self) -> u64 {
        self.discounts.iter().map(|line| line.amount_cents).sum()
    }
}

/// Saved plan awaiting checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: PlanId,
    pub created_at: DateTime<Utc>,
    pub request: PlanRequest,
    pub quote: PlanQuote,
}

impl PlanRecord {
    pub fn summary_view(&self) -> PlanSummaryView {
        PlanSummaryView {
            id: self.id.clone(),
            created_at: self.created_at,
            dogs: self
                .quote
                .dogs
                .iter()
                .map(|dog| dog.dog.clone())
                .collect(),
            cadence_weeks: self.quote.cadence_weeks,
            total_cents: self.quote.total_cents,
            price_per_day_cents: self.quote.price_per_day_cents,
        }
    }
}

/// Compact listing row for recently saved plans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummaryView {
    pub id: PlanId,
    pub created_at: DateTime<Utc>,
    pub dogs: Vec<String>,
    pub cadence_weeks: u8,
    pub total_cents: u64,
    pub price_per_day_cents: u64,
}
