//! Plan builder backend: quoting, persistence and the HTTP surface for saved plans.

pub mod domain;
mod quote;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    DogPlanRequest, DogQuote, PlanId, PlanQuote, PlanRecord, PlanRequest, PlanSummaryView,
    PortionQuote,
};
pub use quote::PlanQuoter;
pub use repository::{PlanRepository, RepositoryError};
pub use router::plan_router;
pub use service::{PlanService, PlanServiceError};

use crate::nutrition::NutritionError;

/// A plan request that cannot be quoted as submitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("a plan needs at least one dog")]
    NoDogs,
    #[error("delivery cadence must be between 1 and 8 weeks (found {0})")]
    InvalidCadence(u8),
    #[error("{dog} can rotate at most 3 recipes (found {count})")]
    TooManyRecipes { dog: String, count: usize },
    #[error("{dog} lists {recipe} more than once")]
    DuplicateRecipe { dog: String, recipe: String },
    #[error("unknown recipe '{recipe}' for {dog}")]
    UnknownRecipe { dog: String, recipe: String },
    #[error("{recipe} contains {allergens}, which {dog} is allergic to")]
    AllergenConflict {
        dog: String,
        recipe: String,
        allergens: String,
    },
    #[error("every recipe is excluded by {dog}'s allergies")]
    NoEligibleRecipes { dog: String },
    #[error("cannot size {dog}'s meals: {source}")]
    Nutrition {
        dog: String,
        #[source]
        source: NutritionError,
    },
}
