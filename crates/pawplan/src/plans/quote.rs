use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use super::domain::{
    DogPlanRequest, DogQuote, PlanQuote, PlanRequest, PortionQuote, MAX_CADENCE_WEEKS,
    MAX_RECIPES_PER_DOG, SCHEDULE_PREVIEW,
};
use super::PlanError;
use crate::catalog::{normalize_slug, Recipe, RecipeCatalog};
use crate::nutrition::energy::daily_energy_requirement;
use crate::nutrition::portions::{grams_per_delivery, pounds_per_delivery, split_portions};
use crate::nutrition::profile::DogProfile;
use crate::nutrition::NutritionError;
use crate::pricing::{apply_discounts, DiscountPolicy, PriceTable};
use crate::recommendation::{
    Recommendation, RecommendationEngine, DEFAULT_RECOMMENDATION_LIMIT,
};

const DAYS_PER_WEEK: u64 = 7;

/// Turns a plan request into portions and prices. Holds no per-request state.
#[derive(Debug, Clone, Default)]
pub struct PlanQuoter {
    catalog: RecipeCatalog,
    prices: PriceTable,
    engine: RecommendationEngine,
    discounts: DiscountPolicy,
}

impl PlanQuoter {
    pub fn new(
        catalog: RecipeCatalog,
        prices: PriceTable,
        engine: RecommendationEngine,
        discounts: DiscountPolicy,
    ) -> Self {
        Self {
            catalog,
            prices,
            engine,
            discounts,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            RecipeCatalog::standard(),
            PriceTable::standard(),
            RecommendationEngine::default(),
            DiscountPolicy::default(),
        )
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn discounts(&self) -> &DiscountPolicy {
        &self.discounts
    }

    pub fn recommend(
        &self,
        profile: &DogProfile,
        limit: usize,
    ) -> Result<Recommendation, NutritionError> {
        self.engine.recommend(profile, &self.catalog, limit)
    }

    pub fn quote(&self, request: &PlanRequest) -> Result<PlanQuote, PlanError> {
        if request.dogs.is_empty() {
            return Err(PlanError::NoDogs);
        }
        if request.cadence_weeks == 0 || request.cadence_weeks > MAX_CADENCE_WEEKS {
            return Err(PlanError::InvalidCadence(request.cadence_weeks));
        }

        let dogs = request
            .dogs
            .iter()
            .map(|dog| self.quote_dog(dog, request.cadence_weeks))
            .collect::<Result<Vec<_>, _>>()?;

        let dog_subtotals: Vec<(String, u64)> = dogs
            .iter()
            .map(|dog| (dog.dog.clone(), dog.delivery_cents))
            .collect();
        let subtotal_cents: u64 = dog_subtotals.iter().map(|(_, cents)| cents).sum();
        let discounts = apply_discounts(&self.discounts, &dog_subtotals, request.first_box);
        let discount_cents: u64 = discounts.iter().map(|line| line.amount_cents).sum();
        let total_cents = subtotal_cents.saturating_sub(discount_cents);

        let days = DAYS_PER_WEEK * u64::from(request.cadence_weeks);
        let price_per_day_cents = (total_cents + days / 2) / days;

        let grams_per_day: f64 = dogs.iter().map(|dog| dog.grams_per_day).sum();

        Ok(PlanQuote {
            cadence_weeks: request.cadence_weeks,
            first_box: request.first_box,
            dogs,
            subtotal_cents,
            discounts,
            total_cents,
            price_per_day_cents,
            grams_per_delivery: grams_per_delivery(grams_per_day, request.cadence_weeks),
            pounds_per_delivery: pounds_per_delivery(grams_per_day, request.cadence_weeks),
            delivery_schedule: request
                .start_on
                .map(|start| delivery_schedule(start, request.cadence_weeks))
                .unwrap_or_default(),
        })
    }

    fn quote_dog(&self, request: &DogPlanRequest, cadence_weeks: u8) -> Result<DogQuote, PlanError> {
        let profile = &request.profile;
        let nutrition = |source| PlanError::Nutrition {
            dog: profile.name.clone(),
            source,
        };

        let energy = daily_energy_requirement(profile).map_err(nutrition)?;
        let recommended = request.recipes.is_empty();
        let recipes = if recommended {
            self.recommended_recipes(profile)?
        } else {
            self.selected_recipes(profile, &request.recipes)?
        };

        let lines = split_portions(
            energy.der_kcal,
            request.portion,
            &recipes,
            request.meals_per_day,
        )
        .map_err(nutrition)?;

        let weight_lb = profile.weight.in_lb();
        let portions: Vec<PortionQuote> = recipes
            .iter()
            .zip(lines.iter())
            .map(|(recipe, line)| {
                let price = self.prices.resolve(recipe, weight_lb, line);
                PortionQuote {
                    recipe: recipe.slug.clone(),
                    recipe_name: recipe.name.clone(),
                    kcal_per_day: line.kcal_per_day,
                    grams_per_day: line.grams_per_day,
                    grams_per_meal: line.grams_per_meal,
                    daily_cents: price.daily_cents,
                    price_source: price.source,
                }
            })
            .collect();

        let daily_cents: u64 = portions.iter().map(|portion| portion.daily_cents).sum();
        let grams_per_day: f64 = portions.iter().map(|portion| portion.grams_per_day).sum();

        Ok(DogQuote {
            dog: profile.name.clone(),
            portion: request.portion,
            meals_per_day: request.meals_per_day,
            recommended,
            energy,
            portions,
            grams_per_day,
            daily_cents,
            delivery_cents: daily_cents * DAYS_PER_WEEK * u64::from(cadence_weeks),
        })
    }

    fn recommended_recipes(&self, profile: &DogProfile) -> Result<Vec<&Recipe>, PlanError> {
        let recommendation = self
            .engine
            .recommend(profile, &self.catalog, DEFAULT_RECOMMENDATION_LIMIT)
            .map_err(|source| PlanError::Nutrition {
                dog: profile.name.clone(),
                source,
            })?;

        let recipes: Vec<&Recipe> = recommendation
            .ranked
            .iter()
            .filter_map(|score| self.catalog.get(&score.recipe))
            .collect();

        if recipes.is_empty() {
            return Err(PlanError::NoEligibleRecipes {
                dog: profile.name.clone(),
            });
        }
        Ok(recipes)
    }

    fn selected_recipes(
        &self,
        profile: &DogProfile,
        slugs: &[String],
    ) -> Result<Vec<&Recipe>, PlanError> {
        if slugs.len() > MAX_RECIPES_PER_DOG {
            return Err(PlanError::TooManyRecipes {
                dog: profile.name.clone(),
                count: slugs.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut recipes = Vec::with_capacity(slugs.len());
        for slug in slugs {
            let key = normalize_slug(slug);
            if !seen.insert(key.clone()) {
                return Err(PlanError::DuplicateRecipe {
                    dog: profile.name.clone(),
                    recipe: key,
                });
            }

            let recipe = self
                .catalog
                .get(&key)
                .ok_or_else(|| PlanError::UnknownRecipe {
                    dog: profile.name.clone(),
                    recipe: key.clone(),
                })?;

            let conflicts = recipe.conflicts_with(profile);
            if !conflicts.is_empty() {
                let labels: Vec<&str> = conflicts.iter().map(|allergen| allergen.label()).collect();
                return Err(PlanError::AllergenConflict {
                    dog: profile.name.clone(),
                    recipe: key,
                    allergens: labels.join(", "),
                });
            }

            recipes.push(recipe);
        }

        Ok(recipes)
    }
}

fn delivery_schedule(start: NaiveDate, cadence_weeks: u8) -> Vec<NaiveDate> {
    (0..SCHEDULE_PREVIEW)
        .filter_map(|index| {
            let offset = Duration::weeks(i64::from(cadence_weeks) * index as i64);
            start.checked_add_signed(offset)
        })
        .collect()
}
