use serde::{Deserialize, Serialize};

use super::profile::{DogProfile, HealthGoal};
use super::NutritionError;

const RER_COEFFICIENT: f64 = 70.0;
const RER_EXPONENT: f64 = 0.75;
const MAX_WEIGHT_KG: f64 = 100.0;

const EARLY_PUPPY_MONTHS: f64 = 4.0;
const PUPPY_MONTHS: f64 = 12.0;
const GIANT_PUPPY_MONTHS: f64 = 18.0;
const GIANT_BREED_KG: f64 = 40.0;
const SENIOR_MONTHS: f64 = 84.0;

/// Each BCS point away from 5 is roughly ten percent of ideal body weight.
const BCS_WEIGHT_STEP: f64 = 0.1;
const WEIGHT_LOSS_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    PuppyEarly,
    PuppyLate,
    Adult,
    Senior,
}

impl LifeStage {
    pub const fn is_puppy(self) -> bool {
        matches!(self, LifeStage::PuppyEarly | LifeStage::PuppyLate)
    }

    pub const fn label(self) -> &'static str {
        match self {
            LifeStage::PuppyEarly => "young puppy",
            LifeStage::PuppyLate => "puppy",
            LifeStage::Adult => "adult",
            LifeStage::Senior => "senior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    Maintain,
    Lose,
    Gain,
}

/// Calorie target derived from a dog profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRequirement {
    pub rer_kcal: f64,
    pub der_kcal: f64,
    pub factor: f64,
    pub life_stage: LifeStage,
    pub weight_goal: WeightGoal,
    /// Weight the RER was computed from: current weight, or ideal weight when changing weight.
    pub basis_weight_kg: f64,
}

pub fn resting_energy_requirement(weight_kg: f64) -> Result<f64, NutritionError> {
    validate_weight(weight_kg)?;
    Ok(rer_unchecked(weight_kg))
}

/// RER for a weight derived from already-validated inputs, such as an estimated ideal weight.
fn rer_unchecked(weight_kg: f64) -> f64 {
    RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT)
}

pub fn life_stage(age_months: f64, expected_adult_kg: Option<f64>) -> LifeStage {
    let puppy_until = match expected_adult_kg {
        Some(kg) if kg > GIANT_BREED_KG => GIANT_PUPPY_MONTHS,
        _ => PUPPY_MONTHS,
    };

    if age_months < EARLY_PUPPY_MONTHS {
        LifeStage::PuppyEarly
    } else if age_months < puppy_until {
        LifeStage::PuppyLate
    } else if age_months >= SENIOR_MONTHS {
        LifeStage::Senior
    } else {
        LifeStage::Adult
    }
}

pub fn base_factor(stage: LifeStage, neutered: bool) -> f64 {
    match stage {
        LifeStage::PuppyEarly => 3.0,
        LifeStage::PuppyLate => 2.0,
        LifeStage::Adult if neutered => 1.6,
        LifeStage::Adult => 1.8,
        LifeStage::Senior => 1.4,
    }
}

pub fn weight_goal(profile: &DogProfile, stage: LifeStage) -> WeightGoal {
    if stage.is_puppy() {
        return WeightGoal::Maintain;
    }

    let bcs = profile.body_condition;
    if bcs >= 7 || (bcs >= 6 && profile.has_goal(HealthGoal::WeightManagement)) {
        WeightGoal::Lose
    } else if bcs <= 3 {
        WeightGoal::Gain
    } else {
        WeightGoal::Maintain
    }
}

/// Estimate the weight a dog should be fed for.
pub fn ideal_weight_kg(current_kg: f64, body_condition: u8) -> f64 {
    let deviation = f64::from(body_condition) - 5.0;
    if deviation > 0.0 {
        current_kg / (1.0 + BCS_WEIGHT_STEP * deviation)
    } else if deviation < 0.0 {
        current_kg / (1.0 - BCS_WEIGHT_STEP * -deviation)
    } else {
        current_kg
    }
}

pub fn daily_energy_requirement(profile: &DogProfile) -> Result<EnergyRequirement, NutritionError> {
    let current_kg = profile.weight.in_kg();
    validate_weight(current_kg)?;
    if !(1..=9).contains(&profile.body_condition) {
        return Err(NutritionError::InvalidBodyCondition(profile.body_condition));
    }

    let age_months = profile.age.in_months();
    if !age_months.is_finite() || age_months < 0.0 {
        return Err(NutritionError::InvalidAge { months: age_months });
    }

    let expected_adult_kg = profile.expected_adult_weight.map(|weight| weight.in_kg());
    let stage = life_stage(age_months, expected_adult_kg);
    let goal = weight_goal(profile, stage);
    let base = base_factor(stage, profile.neutered);
    let activity = profile.activity.multiplier();

    let (basis_weight_kg, factor) = match goal {
        _ if stage.is_puppy() => (current_kg, base),
        WeightGoal::Maintain => (current_kg, base * activity),
        WeightGoal::Lose => (target_or_ideal(profile, current_kg)?, WEIGHT_LOSS_FACTOR),
        WeightGoal::Gain => (target_or_ideal(profile, current_kg)?, base * activity),
    };

    let rer_kcal = rer_unchecked(basis_weight_kg);
    let der_kcal = rer_kcal * factor;

    tracing::debug!(
        dog = %profile.name,
        life_stage = stage.label(),
        ?goal,
        basis_weight_kg,
        der_kcal,
        "computed daily energy requirement"
    );

    Ok(EnergyRequirement {
        rer_kcal,
        der_kcal,
        factor,
        life_stage: stage,
        weight_goal: goal,
        basis_weight_kg,
    })
}

fn target_or_ideal(profile: &DogProfile, current_kg: f64) -> Result<f64, NutritionError> {
    match profile.target_weight {
        Some(target) => {
            let kg = target.in_kg();
            validate_weight(kg)?;
            Ok(kg)
        }
        None => Ok(ideal_weight_kg(current_kg, profile.body_condition)),
    }
}

fn validate_weight(weight_kg: f64) -> Result<(), NutritionError> {
    if weight_kg.is_finite() && weight_kg > 0.0 && weight_kg <= MAX_WEIGHT_KG {
        Ok(())
    } else {
        Err(NutritionError::InvalidWeight { kg: weight_kg })
    }
}
