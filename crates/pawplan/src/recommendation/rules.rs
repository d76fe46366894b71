use super::config::ScoringConfig;
use super::{ScoreComponent, ScoreFactor};
use crate::catalog::{Highlight, Recipe};
use crate::nutrition::energy::{LifeStage, WeightGoal};
use crate::nutrition::profile::{ActivityLevel, DogProfile, HealthGoal};

/// What the scorer needs to know about a dog beyond its raw profile.
pub(crate) struct ScoringContext<'a> {
    pub profile: &'a DogProfile,
    pub life_stage: LifeStage,
    pub weight_goal: WeightGoal,
}

struct Tally {
    components: Vec<ScoreComponent>,
    total: i16,
}

impl Tally {
    fn new(base: i16) -> Self {
        Self {
            components: Vec::new(),
            total: base,
        }
    }

    fn add(&mut self, factor: ScoreFactor, score: i16, notes: String) {
        self.total = self.total.saturating_add(score);
        self.components.push(ScoreComponent {
            factor,
            score,
            notes,
        });
    }
}

pub(crate) fn score_recipe(
    recipe: &Recipe,
    context: &ScoringContext<'_>,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, i16) {
    let macros = recipe.macros;
    let weights = &config.weights;
    let profile = context.profile;
    let mut tally = Tally::new(config.base_score);

    match context.weight_goal {
        WeightGoal::Lose => {
            if macros.fat_pct <= config.lean_fat_max_pct {
                tally.add(
                    ScoreFactor::WeightLoss,
                    weights.lean_fat,
                    format!("lean recipe at {:.1}% fat supports weight loss", macros.fat_pct),
                );
            } else if macros.fat_pct > config.high_fat_penalty_pct {
                tally.add(
                    ScoreFactor::WeightLoss,
                    weights.high_fat_penalty,
                    format!("{:.1}% fat is rich for a weight-loss plan", macros.fat_pct),
                );
            }
            if macros.kcal_per_kg <= config.light_kcal_per_kg {
                tally.add(
                    ScoreFactor::WeightLoss,
                    weights.light_calories,
                    format!("lower calorie density ({:.0} kcal/kg)", macros.kcal_per_kg),
                );
            }
            if macros.fiber_pct >= config.high_fiber_pct {
                tally.add(
                    ScoreFactor::WeightLoss,
                    weights.satiety_fiber,
                    format!("{:.1}% fiber helps keep them full", macros.fiber_pct),
                );
            }
        }
        WeightGoal::Gain => {
            if macros.kcal_per_kg >= config.dense_kcal_per_kg {
                tally.add(
                    ScoreFactor::WeightGain,
                    weights.dense_calories,
                    format!(
                        "calorie-dense ({:.0} kcal/kg) for healthy weight gain",
                        macros.kcal_per_kg
                    ),
                );
            }
            if macros.fat_pct >= config.rich_fat_min_pct {
                tally.add(
                    ScoreFactor::WeightGain,
                    weights.rich_fat,
                    format!("{:.1}% fat adds energy without bigger portions", macros.fat_pct),
                );
            }
        }
        WeightGoal::Maintain => {}
    }

    match context.life_stage {
        LifeStage::PuppyEarly | LifeStage::PuppyLate => {
            if macros.protein_pct >= config.puppy_protein_pct {
                tally.add(
                    ScoreFactor::Growth,
                    weights.puppy_protein,
                    format!("{:.1}% protein supports growth", macros.protein_pct),
                );
            }
            if macros.fat_pct >= config.rich_fat_min_pct {
                tally.add(
                    ScoreFactor::Growth,
                    weights.puppy_fat,
                    "enough fat for a growing puppy".to_string(),
                );
            }
        }
        LifeStage::Senior => {
            if macros.kcal_per_kg <= config.senior_kcal_per_kg {
                tally.add(
                    ScoreFactor::Senior,
                    weights.senior_calories,
                    "moderate calories suit a slower senior metabolism".to_string(),
                );
            }
            if macros.fiber_pct >= config.senior_fiber_pct {
                tally.add(
                    ScoreFactor::Senior,
                    weights.senior_fiber,
                    "fiber supports senior digestion".to_string(),
                );
            }
        }
        LifeStage::Adult => {}
    }

    let athlete = matches!(
        profile.activity,
        ActivityLevel::Active | ActivityLevel::Working
    );
    if athlete && !context.life_stage.is_puppy() {
        if macros.protein_pct >= config.athlete_protein_pct {
            tally.add(
                ScoreFactor::Activity,
                weights.athlete_protein,
                format!(
                    "{:.1}% protein for a {} dog's muscle recovery",
                    macros.protein_pct,
                    profile.activity.label()
                ),
            );
        }
        if macros.kcal_per_kg >= config.dense_kcal_per_kg {
            tally.add(
                ScoreFactor::Activity,
                weights.athlete_calories,
                "energy-dense enough to fuel an active day".to_string(),
            );
        }
    }

    if profile.has_goal(HealthGoal::Digestion) && macros.fiber_pct >= config.high_fiber_pct {
        tally.add(
            ScoreFactor::Digestion,
            weights.digestion,
            format!("{:.1}% fiber for digestive health", macros.fiber_pct),
        );
    }

    if profile.has_goal(HealthGoal::SkinAndCoat)
        && (recipe.has_highlight(Highlight::Omega3) || macros.fat_pct >= config.rich_fat_min_pct)
    {
        let note = if recipe.has_highlight(Highlight::Omega3) {
            "omega-3 fatty acids for skin and coat"
        } else {
            "healthy fats for skin and coat"
        };
        tally.add(ScoreFactor::SkinAndCoat, weights.skin_and_coat, note.to_string());
    }

    if profile.has_goal(HealthGoal::JointSupport)
        && (recipe.has_highlight(Highlight::Omega3) || recipe.has_highlight(Highlight::JointSupport))
    {
        tally.add(
            ScoreFactor::JointSupport,
            weights.joint_support,
            "includes joint-supporting nutrients".to_string(),
        );
    }

    if profile.has_goal(HealthGoal::FoodSensitivity) && recipe.has_novel_protein() {
        tally.add(
            ScoreFactor::FoodSensitivity,
            weights.novel_protein,
            "novel protein is gentler on sensitive stomachs".to_string(),
        );
    }

    if let Some(protein) = recipe
        .proteins
        .iter()
        .find(|protein| profile.preferred_proteins.contains(protein))
    {
        tally.add(
            ScoreFactor::PreferredProtein,
            weights.preferred_protein,
            format!("{} is one of {}'s favorites", protein.label(), profile.name),
        );
    }

    (tally.components, tally.total)
}
