use crate::models::NutrientUnit;

/// The fixed nutrient vocabulary, in display order.
pub const NUTRIENT_ORDER: [&str; 9] = [
    PROTEIN, FAT, FIBER, ASH, CALCIUM, PHOSPHORUS, ENERGY, LYSINE, METHIONINE,
];

pub const PROTEIN: &str = "Protein";
pub const FAT: &str = "Fat";
pub const FIBER: &str = "Fiber";
pub const ASH: &str = "Ash";
pub const CALCIUM: &str = "Calcium";
pub const PHOSPHORUS: &str = "Phosphorus";
pub const ENERGY: &str = "Energy";
pub const LYSINE: &str = "Lysine";
pub const METHIONINE: &str = "Methionine";

/// Unit for a nutrient name. Energy is the only kcal/kg nutrient; every
/// other value is a percentage of mass. Keeping this in one place means a
/// nutrient name can never be read under two different units.
pub fn nutrient_unit(name: &str) -> NutrientUnit {
    if name == ENERGY {
        NutrientUnit::KcalPerKg
    } else {
        NutrientUnit::Percent
    }
}

/// In Percent mode, component amounts must sum to this before a mix can be
/// saved.
pub const PERCENT_SUM_TARGET: f64 = 100.0;

/// Tolerance on the percent sum check.
pub const PERCENT_SUM_TOLERANCE: f64 = 0.1;

/// Catalog id of the ingredient the protein auto-suggest reaches for.
pub const SUGGESTED_PROTEIN_SOURCE: &str = "soybean_meal";

/// Fixed amount the auto-suggest appends, in the mix's own unit
/// (percentage points or kilograms).
pub const SUGGEST_AMOUNT: f64 = 15.0;
