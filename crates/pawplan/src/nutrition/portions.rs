use serde::{Deserialize, Serialize};

use super::units::g_to_lb;
use super::NutritionError;
use crate::catalog::Recipe;

pub const DEFAULT_MEALS_PER_DAY: u8 = 2;
pub const MAX_MEALS_PER_DAY: u8 = 4;
const DAYS_PER_WEEK: f64 = 7.0;

/// Share of the daily calories a plan supplies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPortion {
    #[default]
    Full,
    Topper25,
    Topper50,
    Topper75,
}

impl MealPortion {
    pub const fn fraction(self) -> f64 {
        match self {
            MealPortion::Full => 1.0,
            MealPortion::Topper25 => 0.25,
            MealPortion::Topper50 => 0.5,
            MealPortion::Topper75 => 0.75,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MealPortion::Full => "full meal",
            MealPortion::Topper25 => "25% topper",
            MealPortion::Topper50 => "50% topper",
            MealPortion::Topper75 => "75% topper",
        }
    }
}

/// Grams of one recipe a dog eats each day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionLine {
    pub recipe: String,
    /// Fraction of the dog's full DER this recipe covers.
    pub calorie_share: f64,
    pub kcal_per_day: f64,
    pub grams_per_day: f64,
    pub grams_per_meal: f64,
}

pub fn daily_grams(kcal_per_day: f64, kcal_per_kg: f64) -> Option<f64> {
    if kcal_per_kg.is_finite() && kcal_per_kg > 0.0 {
        Some(kcal_per_day / (kcal_per_kg / 1000.0))
    } else {
        None
    }
}

/// Split a dog's calories evenly across the recipes it rotates through.
pub fn split_portions(
    der_kcal: f64,
    portion: MealPortion,
    recipes: &[&Recipe],
    meals_per_day: u8,
) -> Result<Vec<PortionLine>, NutritionError> {
    if recipes.is_empty() {
        return Err(NutritionError::NoRecipes);
    }
    if meals_per_day == 0 || meals_per_day > MAX_MEALS_PER_DAY {
        return Err(NutritionError::InvalidMealsPerDay(meals_per_day));
    }

    let calorie_share = portion.fraction() / recipes.len() as f64;

    recipes
        .iter()
        .map(|recipe| {
            let kcal_per_day = der_kcal * calorie_share;
            let grams_per_day = daily_grams(kcal_per_day, recipe.macros.kcal_per_kg).ok_or_else(
                || NutritionError::InvalidEnergyDensity {
                    recipe: recipe.slug.clone(),
                    kcal_per_kg: recipe.macros.kcal_per_kg,
                },
            )?;

            Ok(PortionLine {
                recipe: recipe.slug.clone(),
                calorie_share,
                kcal_per_day,
                grams_per_day,
                grams_per_meal: grams_per_day / f64::from(meals_per_day),
            })
        })
        .collect()
}

pub fn grams_per_delivery(grams_per_day: f64, cadence_weeks: u8) -> f64 {
    grams_per_day * DAYS_PER_WEEK * f64::from(cadence_weeks)
}

pub fn pounds_per_delivery(grams_per_day: f64, cadence_weeks: u8) -> f64 {
    g_to_lb(grams_per_delivery(grams_per_day, cadence_weeks))
}
