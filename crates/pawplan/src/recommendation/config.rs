use serde::{Deserialize, Serialize};

/// Thresholds and weights behind the recipe scoring rubric.
///
/// Percentages are as-fed. Scores are additive on top of `base_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: i16,
    pub lean_fat_max_pct: f64,
    pub rich_fat_min_pct: f64,
    pub high_fat_penalty_pct: f64,
    pub light_kcal_per_kg: f64,
    pub senior_kcal_per_kg: f64,
    pub dense_kcal_per_kg: f64,
    pub high_fiber_pct: f64,
    pub senior_fiber_pct: f64,
    pub puppy_protein_pct: f64,
    pub athlete_protein_pct: f64,
    pub weights: ScoringWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub lean_fat: i16,
    pub high_fat_penalty: i16,
    pub light_calories: i16,
    pub satiety_fiber: i16,
    pub dense_calories: i16,
    pub rich_fat: i16,
    pub puppy_protein: i16,
    pub puppy_fat: i16,
    pub senior_calories: i16,
    pub senior_fiber: i16,
    pub athlete_protein: i16,
    pub athlete_calories: i16,
    pub digestion: i16,
    pub skin_and_coat: i16,
    pub joint_support: i16,
    pub novel_protein: i16,
    pub preferred_protein: i16,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            lean_fat_max_pct: 6.0,
            rich_fat_min_pct: 7.0,
            high_fat_penalty_pct: 8.0,
            light_kcal_per_kg: 1300.0,
            senior_kcal_per_kg: 1400.0,
            dense_kcal_per_kg: 1450.0,
            high_fiber_pct: 1.5,
            senior_fiber_pct: 1.0,
            puppy_protein_pct: 10.0,
            athlete_protein_pct: 11.0,
            weights: ScoringWeights::default(),
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            lean_fat: 20,
            high_fat_penalty: -15,
            light_calories: 10,
            satiety_fiber: 10,
            dense_calories: 15,
            rich_fat: 10,
            puppy_protein: 15,
            puppy_fat: 5,
            senior_calories: 5,
            senior_fiber: 5,
            athlete_protein: 15,
            athlete_calories: 10,
            digestion: 15,
            skin_and_coat: 10,
            joint_support: 10,
            novel_protein: 10,
            preferred_protein: 5,
        }
    }
}
