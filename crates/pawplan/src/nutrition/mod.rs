//! Dog nutrition maths: unit conversion, energy requirements and portion sizing.

pub mod energy;
pub mod portions;
pub mod profile;
pub mod units;

pub use energy::{daily_energy_requirement, EnergyRequirement, LifeStage, WeightGoal};
pub use portions::{MealPortion, PortionLine};
pub use profile::{ActivityLevel, Allergen, DogProfile, HealthGoal, Protein};
pub use units::{Age, AgeUnit, Weight, WeightUnit};

/// Profile or recipe data that cannot produce a meaningful calorie target.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NutritionError {
    #[error("body weight must be between 0 and 100 kg (found {kg:.2} kg)")]
    InvalidWeight { kg: f64 },
    #[error("age must be a non-negative number of months (found {months})")]
    InvalidAge { months: f64 },
    #[error("body condition score must be between 1 and 9 (found {0})")]
    InvalidBodyCondition(u8),
    #[error("recipe {recipe} has no usable energy density ({kcal_per_kg} kcal/kg)")]
    InvalidEnergyDensity { recipe: String, kcal_per_kg: f64 },
    #[error("meals per day must be between 1 and 4 (found {0})")]
    InvalidMealsPerDay(u8),
    #[error("at least one recipe is required to size portions")]
    NoRecipes,
}
