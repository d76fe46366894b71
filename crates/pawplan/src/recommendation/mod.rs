//! Recipe recommendations: scores each menu recipe against a dog profile and explains why.

mod config;
mod rules;

pub use config::{ScoringConfig, ScoringWeights};

use serde::{Deserialize, Serialize};

use crate::catalog::{RecipeCatalog, RecipeExclusion};
use crate::nutrition::energy::{daily_energy_requirement, LifeStage, WeightGoal};
use crate::nutrition::profile::DogProfile;
use crate::nutrition::NutritionError;
use rules::{score_recipe, ScoringContext};

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 2;

/// Stateless scorer applying the rubric to every recipe a dog can eat.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: ScoringConfig,
}

impl RecommendationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn recommend(
        &self,
        profile: &DogProfile,
        catalog: &RecipeCatalog,
        limit: usize,
    ) -> Result<Recommendation, NutritionError> {
        let energy = daily_energy_requirement(profile)?;
        let context = ScoringContext {
            profile,
            life_stage: energy.life_stage,
            weight_goal: energy.weight_goal,
        };

        let (available, excluded) = catalog.available_for(profile);

        let mut ranked: Vec<RecipeScore> = available
            .into_iter()
            .map(|recipe| {
                let (components, total_score) = score_recipe(recipe, &context, &self.config);
                RecipeScore::new(recipe.slug.clone(), total_score, components)
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.recipe.cmp(&b.recipe))
        });
        ranked.truncate(limit);

        tracing::debug!(
            dog = %profile.name,
            top = ?ranked.first().map(|score| score.recipe.as_str()),
            excluded = excluded.len(),
            "ranked recipes"
        );

        Ok(Recommendation {
            dog: profile.name.clone(),
            life_stage: energy.life_stage,
            weight_goal: energy.weight_goal,
            ranked,
            excluded,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    WeightLoss,
    WeightGain,
    Growth,
    Senior,
    Activity,
    Digestion,
    SkinAndCoat,
    JointSupport,
    FoodSensitivity,
    PreferredProtein,
}

/// Discrete contribution to a recipe's score, kept so the storefront can explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: i16,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeScore {
    pub recipe: String,
    pub total_score: i16,
    pub match_percent: u8,
    pub reasoning: String,
    pub components: Vec<ScoreComponent>,
}

impl RecipeScore {
    fn new(recipe: String, total_score: i16, components: Vec<ScoreComponent>) -> Self {
        let positives: Vec<&str> = components
            .iter()
            .filter(|component| component.score > 0)
            .map(|component| component.notes.as_str())
            .collect();
        let reasoning = if positives.is_empty() {
            "balanced everyday recipe".to_string()
        } else {
            positives.join("; ")
        };

        Self {
            recipe,
            total_score,
            match_percent: total_score.clamp(0, 100) as u8,
            reasoning,
            components,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub dog: String,
    pub life_stage: LifeStage,
    pub weight_goal: WeightGoal,
    pub ranked: Vec<RecipeScore>,
    pub excluded: Vec<RecipeExclusion>,
}

impl Recommendation {
    pub fn top_slugs(&self) -> Vec<String> {
        self.ranked.iter().map(|score| score.recipe.clone()).collect()
    }
}
