use chrono::Utc;

use crate::catalog::Catalog;
use crate::engine::blend::{blend_nutrients, cost_per_kg};
use crate::engine::constants::{PERCENT_SUM_TARGET, PERCENT_SUM_TOLERANCE};
use crate::engine::norms::{evaluate_norms, NormTable};
use crate::error::{FeedError, Result};
use crate::models::{
    BirdProfile, ComponentRecord, FeedMix, Finding, MixComponent, NutrientMap, UnitMode,
};

#[derive(Debug, Clone)]
struct Entry {
    id: String,
    amount: f64,
}

/// An in-progress mix being edited for one bird profile.
///
/// Holds the ordered component list and re-derives blend, findings, and
/// cost from the engine on demand; the engine functions themselves stay
/// stateless.
pub struct MixSession<'a> {
    catalog: &'a Catalog,
    profile: BirdProfile,
    mode: UnitMode,
    bird_weight_kg: Option<f64>,
    entries: Vec<Entry>,
}

impl<'a> MixSession<'a> {
    pub fn new(catalog: &'a Catalog, profile: BirdProfile, mode: UnitMode) -> Self {
        Self {
            catalog,
            profile,
            mode,
            bird_weight_kg: None,
            entries: Vec::new(),
        }
    }

    pub fn profile(&self) -> &BirdProfile {
        &self.profile
    }

    pub fn mode(&self) -> UnitMode {
        self.mode
    }

    pub fn set_bird_weight(&mut self, weight_kg: Option<f64>) {
        self.bird_weight_kg = weight_kg;
    }

    /// Set a component's amount, adding it if absent.
    ///
    /// The ingredient is resolved against the catalog by id or name,
    /// case-insensitively; the stored key is always the canonical id.
    pub fn set_amount(&mut self, ingredient: &str, amount: f64) -> Result<()> {
        if amount < 0.0 {
            return Err(FeedError::InvalidInput(format!(
                "amount must be non-negative, got {}",
                amount
            )));
        }

        let id = self
            .catalog
            .get(ingredient)
            .ok_or_else(|| FeedError::IngredientNotFound(ingredient.to_string()))?
            .key();

        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.amount = amount,
            None => self.entries.push(Entry { id, amount }),
        }
        Ok(())
    }

    /// Remove a component. Removing an absent component is a no-op.
    pub fn remove(&mut self, ingredient: &str) -> Result<()> {
        let id = self
            .catalog
            .get(ingredient)
            .ok_or_else(|| FeedError::IngredientNotFound(ingredient.to_string()))?
            .key();
        self.entries.retain(|e| e.id != id);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Components in insertion order, resolved against the catalog.
    pub fn components(&self) -> Vec<MixComponent<'a>> {
        self.entries
            .iter()
            .filter_map(|e| {
                self.catalog
                    .get(&e.id)
                    .map(|ingredient| MixComponent::new(ingredient, e.amount))
            })
            .collect()
    }

    pub fn total_amount(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Percent-mode mixes must sum to 100 (±0.1) before saving. Mass-mode
    /// amounts carry no such constraint.
    pub fn percent_sum_ok(&self) -> bool {
        match self.mode {
            UnitMode::Percent => {
                (self.total_amount() - PERCENT_SUM_TARGET).abs() <= PERCENT_SUM_TOLERANCE
            }
            UnitMode::Mass => true,
        }
    }

    pub fn blend(&self) -> NutrientMap {
        blend_nutrients(&self.components(), self.mode)
    }

    pub fn findings(&self, norms: &NormTable) -> Vec<Finding> {
        evaluate_norms(&self.blend(), &self.profile, norms)
    }

    pub fn cost(&self) -> f64 {
        cost_per_kg(&self.components(), self.mode)
    }

    /// Produce the immutable record for persistence.
    ///
    /// Enforces the percent-sum precondition the engine itself does not
    /// check.
    pub fn finalize(&self, name: impl Into<String>) -> Result<FeedMix> {
        if self.entries.is_empty() {
            return Err(FeedError::InvalidInput(
                "mix has no components".to_string(),
            ));
        }
        if !self.percent_sum_ok() {
            return Err(FeedError::InvalidInput(format!(
                "component percentages sum to {:.2}, expected {:.0} (within {})",
                self.total_amount(),
                PERCENT_SUM_TARGET,
                PERCENT_SUM_TOLERANCE
            )));
        }

        let components = self.components();
        Ok(FeedMix {
            name: name.into(),
            species: self.profile.species,
            goal: self.profile.goal,
            age_class: self.profile.age_class,
            bird_weight_kg: self.bird_weight_kg,
            unit_mode: self.mode,
            components: self
                .entries
                .iter()
                .map(|e| ComponentRecord {
                    ingredient_id: e.id.clone(),
                    amount: e.amount,
                })
                .collect(),
            blended_nutrients: blend_nutrients(&components, self.mode),
            cost_per_kg: Some(cost_per_kg(&components, self.mode)),
            created_at: Utc::now(),
        })
    }
}
