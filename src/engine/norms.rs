use std::collections::{BTreeMap, HashMap};

use crate::models::{BirdProfile, Finding, NormRange, NutrientMap};

/// Norm ranges indexed by bird profile.
///
/// Read-only after construction. Not every profile has an entry; a missing
/// profile means "norms unknown", which evaluates to zero findings.
#[derive(Debug, Clone, Default)]
pub struct NormTable {
    entries: HashMap<BirdProfile, BTreeMap<String, NormRange>>,
}

impl NormTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, profile: BirdProfile, nutrient: impl Into<String>, range: NormRange) {
        self.entries
            .entry(profile)
            .or_default()
            .insert(nutrient.into(), range);
    }

    /// Ranges for a profile, alphabetical by nutrient name.
    pub fn ranges_for(&self, profile: &BirdProfile) -> Option<&BTreeMap<String, NormRange>> {
        self.entries.get(profile)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &BirdProfile> {
        self.entries.keys()
    }
}

/// Classify each blended nutrient against the norm ranges for a profile.
///
/// Nutrients the norm table covers but the blend lacks come back as
/// `Missing`, so the caller can tell "checked and fine" apart from "never
/// computed". Findings are ordered alphabetically by nutrient name.
/// Triggering any user-facing alert from a finding is the caller's job.
pub fn evaluate_norms(
    blend: &NutrientMap,
    profile: &BirdProfile,
    norms: &NormTable,
) -> Vec<Finding> {
    let Some(ranges) = norms.ranges_for(profile) else {
        return Vec::new();
    };

    let mut findings = Vec::new();
    for (nutrient, range) in ranges {
        match blend.get(nutrient) {
            None => findings.push(Finding::missing(nutrient.clone(), *range)),
            Some(sample) if sample.value < range.min => {
                findings.push(Finding::deficit(nutrient.clone(), sample.value, *range));
            }
            Some(sample) if sample.value > range.max => {
                findings.push(Finding::excess(nutrient.clone(), sample.value, *range));
            }
            Some(_) => {}
        }
    }

    findings
}
