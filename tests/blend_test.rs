use assert_float_eq::assert_float_absolute_eq;

use feed_mixer_rs::catalog::{catalog, norm_table};
use feed_mixer_rs::engine::constants::{CALCIUM, ENERGY, PROTEIN};
use feed_mixer_rs::engine::{blend_nutrients, cost_per_kg, evaluate_norms};
use feed_mixer_rs::models::{
    AgeClass, BirdProfile, FindingKind, Goal, MixComponent, NutrientUnit, Species, UnitMode,
};

fn chick_profile() -> BirdProfile {
    BirdProfile::new(Species::Chicken, Goal::Growth, AgeClass::Young)
}

#[test]
fn test_corn_soy_starter_blend() {
    let catalog = catalog();
    let corn = catalog.get("corn").unwrap();
    let soy = catalog.get("soybean_meal").unwrap();

    let components = vec![MixComponent::new(corn, 70.0), MixComponent::new(soy, 30.0)];
    let blend = blend_nutrients(&components, UnitMode::Percent);

    // 0.7 * 8.5 + 0.3 * 46.0
    assert_float_absolute_eq!(blend[PROTEIN].value, 19.75, 1e-6);
    assert_eq!(blend[PROTEIN].unit, NutrientUnit::Percent);

    // 0.7 * 3350 + 0.3 * 2250
    assert_float_absolute_eq!(blend[ENERGY].value, 3020.0, 1e-6);
    assert_eq!(blend[ENERGY].unit, NutrientUnit::KcalPerKg);
}

#[test]
fn test_corn_soy_starter_findings() {
    let catalog = catalog();
    let corn = catalog.get("corn").unwrap();
    let soy = catalog.get("soybean_meal").unwrap();

    let components = vec![MixComponent::new(corn, 70.0), MixComponent::new(soy, 30.0)];
    let blend = blend_nutrients(&components, UnitMode::Percent);
    let findings = evaluate_norms(&blend, &chick_profile(), norm_table());

    // Protein at 19.75 sits just under the 20..23 band.
    let protein = findings
        .iter()
        .find(|f| f.nutrient == PROTEIN)
        .expect("protein finding");
    assert_eq!(protein.kind, FindingKind::Deficit);

    // Energy at 3020 is inside 2800..3200.
    assert!(findings.iter().all(|f| f.nutrient != ENERGY));
}

#[test]
fn test_pure_oyster_shell_mix() {
    let catalog = catalog();
    let shell = catalog.get("oyster_shell").unwrap();

    let components = vec![MixComponent::new(shell, 100.0)];
    let blend = blend_nutrients(&components, UnitMode::Percent);

    assert_float_absolute_eq!(blend[CALCIUM].value, 38.0, 1e-9);

    let findings = evaluate_norms(&blend, &chick_profile(), norm_table());
    let calcium = findings
        .iter()
        .find(|f| f.nutrient == CALCIUM)
        .expect("calcium finding");
    assert_eq!(calcium.kind, FindingKind::Excess);

    // 1.0 * 0.1
    let cost = cost_per_kg(&components, UnitMode::Percent);
    assert_float_absolute_eq!(cost, 0.1, 1e-9);
}

#[test]
fn test_empty_mix_laws() {
    let blend = blend_nutrients(&[], UnitMode::Percent);
    assert!(blend.is_empty());

    assert_eq!(cost_per_kg(&[], UnitMode::Percent), 0.0);
    assert_eq!(cost_per_kg(&[], UnitMode::Mass), 0.0);

    // With an empty blend, every normed nutrient reads as missing.
    let findings = evaluate_norms(&blend, &chick_profile(), norm_table());
    assert!(findings.iter().all(|f| f.kind == FindingKind::Missing));
}

#[test]
fn test_mass_mode_matches_percent_mode_composition() {
    let catalog = catalog();
    let corn = catalog.get("corn").unwrap();
    let soy = catalog.get("soybean_meal").unwrap();

    // Same 70/30 proportions expressed as 140 kg + 60 kg.
    let mass = vec![MixComponent::new(corn, 140.0), MixComponent::new(soy, 60.0)];
    let percent = vec![MixComponent::new(corn, 70.0), MixComponent::new(soy, 30.0)];

    let by_mass = blend_nutrients(&mass, UnitMode::Mass);
    let by_percent = blend_nutrients(&percent, UnitMode::Percent);

    assert_float_absolute_eq!(by_mass[PROTEIN].value, by_percent[PROTEIN].value, 1e-9);

    // Cost per kg is proportion-driven too.
    let cost_mass = cost_per_kg(&mass, UnitMode::Mass);
    let cost_percent = cost_per_kg(&percent, UnitMode::Percent);
    assert_float_absolute_eq!(cost_mass, cost_percent, 1e-9);
}

#[test]
fn test_blend_order_independent() {
    let catalog = catalog();
    let corn = catalog.get("corn").unwrap();
    let soy = catalog.get("soybean_meal").unwrap();
    let bran = catalog.get("wheat_bran").unwrap();

    let forward = vec![
        MixComponent::new(corn, 60.0),
        MixComponent::new(soy, 25.0),
        MixComponent::new(bran, 15.0),
    ];
    let reversed: Vec<_> = forward.iter().rev().copied().collect();

    let a = blend_nutrients(&forward, UnitMode::Percent);
    let b = blend_nutrients(&reversed, UnitMode::Percent);

    assert_eq!(a.len(), b.len());
    for (name, sample) in &a {
        assert_float_absolute_eq!(sample.value, b[name].value, 1e-9);
    }
}
