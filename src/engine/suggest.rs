use crate::catalog::Catalog;
use crate::engine::constants::{PROTEIN, SUGGEST_AMOUNT, SUGGESTED_PROTEIN_SOURCE};
use crate::engine::norms::NormTable;
use crate::models::{BirdProfile, MixComponent, NutrientMap};

/// Single-nutrient greedy correction for a protein shortfall.
///
/// If blended Protein is below the norm minimum for the profile and the
/// designated protein-rich ingredient is not already in the mix, returns
/// the component list with that ingredient appended at a fixed amount
/// (percentage points or kilograms, whichever the mix uses). Otherwise the
/// list comes back unchanged, which makes repeated calls idempotent.
///
/// Only Protein is ever inspected. This is a one-step nudge, not a
/// formulation solver.
pub fn suggest_protein_fix<'a>(
    components: &[MixComponent<'a>],
    blend: &NutrientMap,
    profile: &BirdProfile,
    norms: &NormTable,
    catalog: &'a Catalog,
) -> Vec<MixComponent<'a>> {
    let mut out = components.to_vec();

    let Some(ranges) = norms.ranges_for(profile) else {
        return out;
    };
    let Some(range) = ranges.get(PROTEIN) else {
        return out;
    };

    // A blend with no Protein key at all counts as zero.
    let current = blend.get(PROTEIN).map_or(0.0, |sample| sample.value);
    if current >= range.min {
        return out;
    }

    let Some(source) = catalog.get(SUGGESTED_PROTEIN_SOURCE) else {
        return out;
    };

    let already_present = out
        .iter()
        .any(|component| component.ingredient.key() == source.key());
    if already_present {
        return out;
    }

    out.push(MixComponent::new(source, SUGGEST_AMOUNT));
    out
}
