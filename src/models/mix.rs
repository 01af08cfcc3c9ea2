use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ingredient::{Ingredient, NutrientSample};
use crate::models::profile::{AgeClass, Goal, Species};

/// Blended nutrient composition keyed by nutrient name.
pub type NutrientMap = BTreeMap<String, NutrientSample>;

/// How component amounts are expressed for a whole mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum UnitMode {
    /// Amounts are percentages of the total mix.
    Percent,

    /// Amounts are absolute kilograms.
    Mass,
}

impl UnitMode {
    /// Symbol shown next to amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitMode::Percent => "%",
            UnitMode::Mass => "kg",
        }
    }
}

impl fmt::Display for UnitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitMode::Percent => write!(f, "percent of mix"),
            UnitMode::Mass => write!(f, "kilograms"),
        }
    }
}

/// One ingredient in a mix, borrowing its catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct MixComponent<'a> {
    pub ingredient: &'a Ingredient,
    pub amount: f64,
}

impl<'a> MixComponent<'a> {
    pub fn new(ingredient: &'a Ingredient, amount: f64) -> Self {
        Self { ingredient, amount }
    }

    /// Unnormalized blending weight: mass fraction in Percent mode, raw
    /// kilograms in Mass mode. Only relative magnitude matters downstream.
    pub fn weight(&self, mode: UnitMode) -> f64 {
        match mode {
            UnitMode::Percent => self.amount / 100.0,
            UnitMode::Mass => self.amount,
        }
    }
}

/// Persisted snapshot of one mix component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub ingredient_id: String,
    pub amount: f64,
}

/// A finalized, saved feed mix.
///
/// Created once on save and never mutated; editing a mix produces a new
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedMix {
    pub name: String,
    pub species: Species,
    pub goal: Goal,
    pub age_class: AgeClass,

    #[serde(default)]
    pub bird_weight_kg: Option<f64>,

    pub unit_mode: UnitMode,

    /// Components in the order they were added.
    pub components: Vec<ComponentRecord>,

    pub blended_nutrients: NutrientMap,

    #[serde(default)]
    pub cost_per_kg: Option<f64>,

    pub created_at: DateTime<Utc>,
}
