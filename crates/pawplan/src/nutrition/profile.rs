use serde::{Deserialize, Serialize};

use super::units::{Age, Weight};

/// Everything the plan builder collects about a dog before recommending food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogProfile {
    pub name: String,
    pub weight: Weight,
    pub age: Age,
    #[serde(default = "default_neutered")]
    pub neutered: bool,
    #[serde(default)]
    pub activity: ActivityLevel,
    /// 1-9 body condition score; 5 is ideal.
    #[serde(default = "default_body_condition")]
    pub body_condition: u8,
    #[serde(default)]
    pub target_weight: Option<Weight>,
    /// Breed-size hint that keeps giant breeds on puppy food longer.
    #[serde(default)]
    pub expected_adult_weight: Option<Weight>,
    #[serde(default)]
    pub health_goals: Vec<HealthGoal>,
    #[serde(default)]
    pub allergies: Vec<Allergen>,
    #[serde(default)]
    pub preferred_proteins: Vec<Protein>,
}

fn default_neutered() -> bool {
    true
}

fn default_body_condition() -> u8 {
    5
}

impl DogProfile {
    pub fn new(name: impl Into<String>, weight: Weight, age: Age) -> Self {
        Self {
            name: name.into(),
            weight,
            age,
            neutered: default_neutered(),
            activity: ActivityLevel::default(),
            body_condition: default_body_condition(),
            target_weight: None,
            expected_adult_weight: None,
            health_goals: Vec::new(),
            allergies: Vec::new(),
            preferred_proteins: Vec::new(),
        }
    }

    pub fn has_goal(&self, goal: HealthGoal) -> bool {
        self.health_goals.contains(&goal)
    }

    pub fn is_allergic_to(&self, allergen: Allergen) -> bool {
        self.allergies.contains(&allergen)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    #[default]
    Moderate,
    Active,
    Working,
}

impl ActivityLevel {
    pub const fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Low => 0.9,
            ActivityLevel::Moderate => 1.0,
            ActivityLevel::Active => 1.2,
            ActivityLevel::Working => 1.5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Working => "working",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    WeightManagement,
    Digestion,
    SkinAndCoat,
    JointSupport,
    FoodSensitivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protein {
    Beef,
    Chicken,
    Turkey,
    Pork,
    Lamb,
    Fish,
}

impl Protein {
    /// Proteins uncommon enough in commercial diets to suit elimination trials.
    pub const fn is_novel(self) -> bool {
        matches!(self, Protein::Pork | Protein::Lamb | Protein::Fish)
    }

    pub const fn allergen(self) -> Allergen {
        match self {
            Protein::Beef => Allergen::Beef,
            Protein::Chicken => Allergen::Chicken,
            Protein::Turkey => Allergen::Turkey,
            Protein::Pork => Allergen::Pork,
            Protein::Lamb => Allergen::Lamb,
            Protein::Fish => Allergen::Fish,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Protein::Beef => "beef",
            Protein::Chicken => "chicken",
            Protein::Turkey => "turkey",
            Protein::Pork => "pork",
            Protein::Lamb => "lamb",
            Protein::Fish => "fish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Beef,
    Chicken,
    Turkey,
    Pork,
    Lamb,
    Fish,
    Egg,
    Dairy,
    Wheat,
    Soy,
    Corn,
}

impl Allergen {
    pub const fn label(self) -> &'static str {
        match self {
            Allergen::Beef => "beef",
            Allergen::Chicken => "chicken",
            Allergen::Turkey => "turkey",
            Allergen::Pork => "pork",
            Allergen::Lamb => "lamb",
            Allergen::Fish => "fish",
            Allergen::Egg => "egg",
            Allergen::Dairy => "dairy",
            Allergen::Wheat => "wheat",
            Allergen::Soy => "soy",
            Allergen::Corn => "corn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_profile_with_defaults() {
        let profile: DogProfile = serde_json::from_str(
            r#"{
                "name": "Biscuit",
                "weight": {"value": 30, "unit": "pounds"},
                "age": {"value": 3, "unit": "years"}
            }"#,
        )
        .expect("profile parses");

        assert!(profile.neutered);
        assert_eq!(profile.activity, ActivityLevel::Moderate);
        assert_eq!(profile.body_condition, 5);
        assert!(profile.allergies.is_empty());
    }

    #[test]
    fn novel_proteins_are_flagged() {
        assert!(Protein::Lamb.is_novel());
        assert!(!Protein::Chicken.is_novel());
        assert_eq!(Protein::Turkey.allergen(), Allergen::Turkey);
    }
}
