use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::Deserialize;

use crate::engine::norms::NormTable;
use crate::models::{
    AgeClass, BirdProfile, Goal, Ingredient, IngredientCategory, NormRange, Species,
};

const INGREDIENTS_JSON: &str = include_str!("../../data/ingredients.json");
const NORMS_JSON: &str = include_str!("../../data/norms.json");

/// The ingredient reference catalog.
///
/// Loaded once from the embedded asset and read-only thereafter. Lookups
/// accept either the ingredient id or its display name, case-insensitively.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        let mut index = HashMap::new();
        for (i, ingredient) in ingredients.iter().enumerate() {
            index.insert(ingredient.id.to_lowercase(), i);
            index.insert(ingredient.name.to_lowercase(), i);
        }
        Self { ingredients, index }
    }

    /// Look up by id or display name (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&Ingredient> {
        self.index
            .get(&key.to_lowercase())
            .map(|&i| &self.ingredients[i])
    }

    pub fn all(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn by_category(&self, category: IngredientCategory) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct NormEntry {
    species: Species,
    goal: Goal,
    age_class: AgeClass,
    ranges: BTreeMap<String, NormRange>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let ingredients: Vec<Ingredient> =
        serde_json::from_str(INGREDIENTS_JSON).expect("embedded ingredient catalog is valid JSON");
    Catalog::new(ingredients)
});

static NORM_TABLE: LazyLock<NormTable> = LazyLock::new(|| {
    let entries: Vec<NormEntry> =
        serde_json::from_str(NORMS_JSON).expect("embedded norm table is valid JSON");

    let mut table = NormTable::new();
    for entry in entries {
        let profile = BirdProfile::new(entry.species, entry.goal, entry.age_class);
        for (nutrient, range) in entry.ranges {
            table.insert(profile, nutrient, range);
        }
    }
    table
});

/// The process-wide ingredient catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// The process-wide norm table.
pub fn norm_table() -> &'static NormTable {
    &NORM_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::constants::{CALCIUM, ENERGY, NUTRIENT_ORDER, PROTEIN};

    #[test]
    fn test_catalog_loads_and_indexes() {
        let catalog = catalog();
        assert!(!catalog.is_empty());

        // By id, by name, and case-insensitively.
        assert!(catalog.get("corn").is_some());
        assert!(catalog.get("Corn").is_some());
        assert!(catalog.get("SOYBEAN_MEAL").is_some());
        assert!(catalog.get("Soybean meal").is_some());
        assert!(catalog.get("no_such_ingredient").is_none());
    }

    #[test]
    fn test_catalog_reference_values() {
        let catalog = catalog();

        let corn = catalog.get("corn").unwrap();
        assert_eq!(corn.nutrient(PROTEIN), Some(8.5));
        assert_eq!(corn.nutrient(ENERGY), Some(3350.0));

        let soy = catalog.get("soybean_meal").unwrap();
        assert_eq!(soy.nutrient(PROTEIN), Some(46.0));
        assert_eq!(soy.nutrient(ENERGY), Some(2250.0));

        let shell = catalog.get("oyster_shell").unwrap();
        assert_eq!(shell.nutrient(CALCIUM), Some(38.0));
        assert_eq!(shell.price_per_kg, Some(0.1));
    }

    #[test]
    fn test_catalog_uses_fixed_nutrient_vocabulary() {
        for ingredient in catalog().all() {
            for name in ingredient.nutrients.keys() {
                assert!(
                    NUTRIENT_ORDER.contains(&name.as_str()),
                    "{} carries unknown nutrient {}",
                    ingredient.id,
                    name
                );
            }
        }
    }

    #[test]
    fn test_norm_table_reference_bands() {
        let norms = norm_table();
        let profile = BirdProfile::new(Species::Chicken, Goal::Growth, AgeClass::Young);
        let ranges = norms.ranges_for(&profile).expect("chick growth norms exist");

        let protein = ranges.get(PROTEIN).unwrap();
        assert_eq!((protein.min, protein.max), (20.0, 23.0));

        let energy = ranges.get(ENERGY).unwrap();
        assert_eq!((energy.min, energy.max), (2800.0, 3200.0));
    }

    #[test]
    fn test_norm_table_absence_is_valid() {
        let norms = norm_table();
        let profile = BirdProfile::new(Species::Goose, Goal::EggLaying, AgeClass::Broiler);
        assert!(norms.ranges_for(&profile).is_none());
    }

    #[test]
    fn test_norm_nutrients_stay_in_vocabulary() {
        let norms = norm_table();
        for profile in norms.profiles() {
            for name in norms.ranges_for(profile).unwrap().keys() {
                assert!(
                    NUTRIENT_ORDER.contains(&name.as_str()),
                    "{} norms carry unknown nutrient {}",
                    profile,
                    name
                );
            }
        }
    }

    #[test]
    fn test_norm_ranges_are_ordered() {
        let norms = norm_table();
        for profile in norms.profiles() {
            for (name, range) in norms.ranges_for(profile).unwrap() {
                assert!(
                    range.min <= range.max,
                    "{} {} range inverted",
                    profile,
                    name
                );
            }
        }
    }
}
