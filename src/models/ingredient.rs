use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::constants::nutrient_unit;

/// Unit of a nutrient value: percentage of mass, or kcal per kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientUnit {
    #[serde(rename = "%")]
    Percent,

    #[serde(rename = "kcal/kg")]
    KcalPerKg,
}

impl fmt::Display for NutrientUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientUnit::Percent => write!(f, "%"),
            NutrientUnit::KcalPerKg => write!(f, "kcal/kg"),
        }
    }
}

/// A single named nutrient value, as produced by the blender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientSample {
    pub name: String,
    pub value: f64,
    pub unit: NutrientUnit,
}

impl NutrientSample {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        let unit = nutrient_unit(&name);
        Self { name, value, unit }
    }
}

/// Broad grouping of catalog ingredients.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum IngredientCategory {
    Grain,
    Byproduct,
    ProteinMeal,
    AnimalProtein,
    Forage,
    Mineral,
    Fat,
    Additive,
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IngredientCategory::Grain => "grain",
            IngredientCategory::Byproduct => "byproduct",
            IngredientCategory::ProteinMeal => "protein meal",
            IngredientCategory::AnimalProtein => "animal protein",
            IngredientCategory::Forage => "forage",
            IngredientCategory::Mineral => "mineral",
            IngredientCategory::Fat => "fat",
            IngredientCategory::Additive => "additive",
        };
        write!(f, "{}", s)
    }
}

/// A catalog ingredient with its nutrient profile.
///
/// Nutrient values are percentages of mass, except Energy which is kcal/kg.
/// Catalog entries are reference data and never change at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: IngredientCategory,

    #[serde(default)]
    pub price_per_kg: Option<f64>,

    pub nutrients: BTreeMap<String, f64>,
}

impl Ingredient {
    /// Raw nutrient value, if this ingredient carries the nutrient.
    pub fn nutrient(&self, name: &str) -> Option<f64> {
        self.nutrients.get(name).copied()
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}
