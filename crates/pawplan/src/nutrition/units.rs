use serde::{Deserialize, Serialize};

pub const LB_PER_KG: f64 = 2.20462;
pub const GRAMS_PER_OZ: f64 = 28.3495;
pub const GRAMS_PER_LB: f64 = 1000.0 / LB_PER_KG;
const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;

pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn oz_to_g(oz: f64) -> f64 {
    oz * GRAMS_PER_OZ
}

pub fn g_to_oz(grams: f64) -> f64 {
    grams / GRAMS_PER_OZ
}

pub fn g_to_lb(grams: f64) -> f64 {
    grams / GRAMS_PER_LB
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[serde(alias = "lb", alias = "lbs")]
    Pounds,
    #[serde(alias = "kg")]
    Kilograms,
}

/// Body weight as entered by the customer; normalised on read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Weight {
    pub const fn pounds(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Pounds,
        }
    }

    pub const fn kilograms(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Kilograms,
        }
    }

    pub fn in_kg(&self) -> f64 {
        match self.unit {
            WeightUnit::Kilograms => self.value,
            WeightUnit::Pounds => lb_to_kg(self.value),
        }
    }

    pub fn in_lb(&self) -> f64 {
        match self.unit {
            WeightUnit::Pounds => self.value,
            WeightUnit::Kilograms => kg_to_lb(self.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeUnit {
    Weeks,
    Months,
    Years,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Age {
    pub value: f64,
    pub unit: AgeUnit,
}

impl Age {
    pub const fn weeks(value: f64) -> Self {
        Self {
            value,
            unit: AgeUnit::Weeks,
        }
    }

    pub const fn months(value: f64) -> Self {
        Self {
            value,
            unit: AgeUnit::Months,
        }
    }

    pub const fn years(value: f64) -> Self {
        Self {
            value,
            unit: AgeUnit::Years,
        }
    }

    pub fn in_months(&self) -> f64 {
        match self.unit {
            AgeUnit::Weeks => self.value * MONTHS_PER_YEAR / WEEKS_PER_YEAR,
            AgeUnit::Months => self.value,
            AgeUnit::Years => self.value * MONTHS_PER_YEAR,
        }
    }

    pub fn in_years(&self) -> f64 {
        self.in_months() / MONTHS_PER_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pounds_and_kilograms_round_trip() {
        for lb in [4.5, 22.0, 61.3, 140.0] {
            assert!((kg_to_lb(lb_to_kg(lb)) - lb).abs() < 1e-9);
        }
        assert!((lb_to_kg(22.0462) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn ounces_convert_to_grams() {
        assert!((oz_to_g(16.0) - 453.592).abs() < 1e-9);
        assert!((g_to_oz(oz_to_g(3.25)) - 3.25).abs() < 1e-9);
    }

    #[test]
    fn weight_normalises_either_unit() {
        let lb = Weight::pounds(44.0924);
        let kg = Weight::kilograms(20.0);
        assert!((lb.in_kg() - 20.0).abs() < 1e-9);
        assert!((kg.in_lb() - 44.0924).abs() < 1e-9);
    }

    #[test]
    fn age_converts_to_months() {
        assert_eq!(Age::years(2.0).in_months(), 24.0);
        assert_eq!(Age::months(7.0).in_months(), 7.0);
        assert!((Age::weeks(13.0).in_months() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn weight_unit_accepts_short_aliases() {
        let weight: Weight =
            serde_json::from_str(r#"{"value": 30, "unit": "lb"}"#).expect("alias parses");
        assert_eq!(weight.unit, WeightUnit::Pounds);
    }
}
