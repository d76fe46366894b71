use serde::{Deserialize, Serialize};

use crate::nutrition::profile::{Allergen, DogProfile, Protein};

/// As-fed macro profile printed on the pack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    pub protein_pct: f64,
    pub fat_pct: f64,
    pub fiber_pct: f64,
    pub moisture_pct: f64,
    pub kcal_per_kg: f64,
}

impl MacroProfile {
    pub fn kcal_per_gram(&self) -> f64 {
        self.kcal_per_kg / 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Omega3,
    JointSupport,
    HighFiber,
    Lean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub slug: String,
    pub name: String,
    pub proteins: Vec<Protein>,
    /// Allergens beyond the named proteins (e.g. egg in a binder).
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    pub macros: MacroProfile,
    pub price_per_100g_cents: u32,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

impl Recipe {
    pub fn has_highlight(&self, highlight: Highlight) -> bool {
        self.highlights.contains(&highlight)
    }

    pub fn has_novel_protein(&self) -> bool {
        self.proteins.iter().any(|protein| protein.is_novel())
    }

    /// Allergens in this recipe that the dog is listed as reacting to.
    pub fn conflicts_with(&self, profile: &DogProfile) -> Vec<Allergen> {
        let mut conflicts: Vec<Allergen> = self
            .proteins
            .iter()
            .map(|protein| protein.allergen())
            .chain(self.allergens.iter().copied())
            .filter(|allergen| profile.is_allergic_to(*allergen))
            .collect();
        conflicts.sort();
        conflicts.dedup();
        conflicts
    }
}

/// A recipe kept off the menu for a dog, with the reason surfaced to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeExclusion {
    pub recipe: String,
    pub allergens: Vec<Allergen>,
}

impl RecipeExclusion {
    pub fn reason(&self) -> String {
        let labels: Vec<&str> = self.allergens.iter().map(|allergen| allergen.label()).collect();
        format!("contains {}", labels.join(", "))
    }
}
