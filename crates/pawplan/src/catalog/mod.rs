//! Recipe catalog: the menu a plan can draw from.

mod domain;
mod normalizer;

pub use domain::{Highlight, MacroProfile, Recipe, RecipeExclusion};
pub use normalizer::normalize_slug;

use serde::Serialize;

use crate::nutrition::profile::{Allergen, DogProfile, Protein};

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The current storefront menu.
    pub fn standard() -> Self {
        Self::new(vec![
            Recipe {
                slug: "beef".to_string(),
                name: "Beef & Russet Potato".to_string(),
                proteins: vec![Protein::Beef],
                allergens: Vec::new(),
                macros: MacroProfile {
                    protein_pct: 11.0,
                    fat_pct: 8.5,
                    fiber_pct: 1.5,
                    moisture_pct: 72.0,
                    kcal_per_kg: 1500.0,
                },
                price_per_100g_cents: 95,
                highlights: Vec::new(),
            },
            Recipe {
                slug: "chicken".to_string(),
                name: "Chicken & Brown Rice".to_string(),
                proteins: vec![Protein::Chicken],
                allergens: vec![Allergen::Egg],
                macros: MacroProfile {
                    protein_pct: 11.5,
                    fat_pct: 7.0,
                    fiber_pct: 1.0,
                    moisture_pct: 74.0,
                    kcal_per_kg: 1340.0,
                },
                price_per_100g_cents: 85,
                highlights: vec![Highlight::JointSupport],
            },
            Recipe {
                slug: "turkey".to_string(),
                name: "Turkey & Pumpkin".to_string(),
                proteins: vec![Protein::Turkey],
                allergens: Vec::new(),
                macros: MacroProfile {
                    protein_pct: 10.0,
                    fat_pct: 5.5,
                    fiber_pct: 1.6,
                    moisture_pct: 76.0,
                    kcal_per_kg: 1250.0,
                },
                price_per_100g_cents: 85,
                highlights: vec![Highlight::Lean, Highlight::HighFiber],
            },
            Recipe {
                slug: "pork".to_string(),
                name: "Pork & Sweet Potato".to_string(),
                proteins: vec![Protein::Pork],
                allergens: Vec::new(),
                macros: MacroProfile {
                    protein_pct: 9.5,
                    fat_pct: 7.5,
                    fiber_pct: 1.0,
                    moisture_pct: 73.0,
                    kcal_per_kg: 1460.0,
                },
                price_per_100g_cents: 90,
                highlights: Vec::new(),
            },
            Recipe {
                slug: "lamb".to_string(),
                name: "Lamb & Lentil with Fish Oil".to_string(),
                proteins: vec![Protein::Lamb],
                allergens: vec![Allergen::Fish],
                macros: MacroProfile {
                    protein_pct: 10.5,
                    fat_pct: 7.2,
                    fiber_pct: 1.2,
                    moisture_pct: 72.0,
                    kcal_per_kg: 1420.0,
                },
                price_per_100g_cents: 110,
                highlights: vec![Highlight::Omega3, Highlight::JointSupport],
            },
        ])
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, slug: &str) -> Option<&Recipe> {
        let key = normalize_slug(slug);
        self.recipes.iter().find(|recipe| recipe.slug == key)
    }

    /// Split the menu into recipes a dog can eat and those its allergies rule out.
    pub fn available_for(&self, profile: &DogProfile) -> (Vec<&Recipe>, Vec<RecipeExclusion>) {
        let mut available = Vec::new();
        let mut excluded = Vec::new();

        for recipe in &self.recipes {
            let conflicts = recipe.conflicts_with(profile);
            if conflicts.is_empty() {
                available.push(recipe);
            } else {
                excluded.push(RecipeExclusion {
                    recipe: recipe.slug.clone(),
                    allergens: conflicts,
                });
            }
        }

        (available, excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::units::{Age, Weight};

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = RecipeCatalog::standard();
        assert_eq!(catalog.get(" Turkey ").map(|r| r.slug.as_str()), Some("turkey"));
        assert!(catalog.get("venison").is_none());
    }

    #[test]
    fn allergies_exclude_protein_and_secondary_allergens() {
        let catalog = RecipeCatalog::standard();
        let mut profile = DogProfile::new("Olive", Weight::pounds(40.0), Age::years(5.0));
        profile.allergies = vec![Allergen::Fish, Allergen::Beef];

        let (available, excluded) = catalog.available_for(&profile);

        let slugs: Vec<&str> = available.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["chicken", "turkey", "pork"]);
        assert_eq!(excluded.len(), 2);
        let lamb = excluded.iter().find(|e| e.recipe == "lamb").expect("lamb excluded");
        assert_eq!(lamb.allergens, vec![Allergen::Fish]);
        assert_eq!(lamb.reason(), "contains fish");
    }
}
