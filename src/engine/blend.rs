use std::collections::BTreeMap;

use crate::engine::constants::ENERGY;
use crate::models::{MixComponent, NutrientMap, NutrientSample, UnitMode};

/// Blend the components into one nutrient composition.
///
/// Each component contributes `value * weight` per nutrient, where weight
/// is the component's mass fraction (Percent mode) or raw kilograms (Mass
/// mode). Non-Energy nutrients come out as the weight-averaged percentage
/// of the blended mass; Energy stays an absolute weighted sum in kcal/kg.
///
/// A mix with zero total weight (empty, or all-zero amounts) blends to an
/// empty mapping. That is the "no data yet" state, not an error; callers
/// suppress norm checks and cost display for it.
pub fn blend_nutrients(components: &[MixComponent<'_>], mode: UnitMode) -> NutrientMap {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    let mut total_weight = 0.0;

    for component in components {
        let weight = component.weight(mode);
        total_weight += weight;

        for (name, value) in &component.ingredient.nutrients {
            *totals.entry(name.clone()).or_insert(0.0) += value * weight;
        }
    }

    if total_weight == 0.0 {
        return NutrientMap::new();
    }

    totals
        .into_iter()
        .map(|(name, total)| {
            let value = if name == ENERGY {
                total
            } else {
                total / total_weight
            };
            (name.clone(), NutrientSample::new(name, value))
        })
        .collect()
}

/// Cost per kilogram of finished mix.
///
/// Unpriced ingredients contribute zero cost but full weight, so a free
/// mineral still dilutes the average. The Percent-mode normalizer is a
/// fixed 1.0: component weights are assumed to sum to ~1, and the caller's
/// percent-sum validation is what makes the number mean "per actual kg".
pub fn cost_per_kg(components: &[MixComponent<'_>], mode: UnitMode) -> f64 {
    let mut total_cost = 0.0;
    let mut total_amount = 0.0;

    for component in components {
        let weight = component.weight(mode);
        total_cost += weight * component.ingredient.price_per_kg.unwrap_or(0.0);
        total_amount += component.amount;
    }

    let normalizer = match mode {
        UnitMode::Percent => 1.0,
        UnitMode::Mass => total_amount,
    };

    if normalizer > 0.0 {
        total_cost / normalizer
    } else {
        0.0
    }
}
