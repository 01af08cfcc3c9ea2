use assert_float_eq::assert_float_absolute_eq;
use tempfile::NamedTempFile;

use feed_mixer_rs::catalog::{catalog, norm_table};
use feed_mixer_rs::engine::constants::{PROTEIN, SUGGESTED_PROTEIN_SOURCE};
use feed_mixer_rs::engine::{blend_nutrients, suggest_protein_fix};
use feed_mixer_rs::models::{
    AgeClass, BirdProfile, FindingKind, Goal, MixComponent, Species, UnitMode,
};
use feed_mixer_rs::state::{append_mix, load_mixes, MixSession};

fn chick_profile() -> BirdProfile {
    BirdProfile::new(Species::Chicken, Goal::Growth, AgeClass::Young)
}

#[test]
fn test_session_to_store_roundtrip() {
    let mut session = MixSession::new(catalog(), chick_profile(), UnitMode::Percent);
    session.set_amount("corn", 70.0).unwrap();
    session.set_amount("soybean_meal", 30.0).unwrap();
    session.set_bird_weight(Some(1.8));

    let mix = session.finalize("chick starter").unwrap();

    let file = NamedTempFile::new().unwrap();
    append_mix(file.path(), mix).unwrap();

    let loaded = load_mixes(file.path()).unwrap();
    assert_eq!(loaded.len(), 1);

    let mix = &loaded[0];
    assert_eq!(mix.name, "chick starter");
    assert_eq!(mix.species, Species::Chicken);
    assert_eq!(mix.bird_weight_kg, Some(1.8));
    assert_eq!(mix.components[0].ingredient_id, "corn");
    assert_eq!(mix.components[1].ingredient_id, "soybean_meal");
    assert_float_absolute_eq!(mix.blended_nutrients[PROTEIN].value, 19.75, 1e-6);
    assert_float_absolute_eq!(mix.cost_per_kg.unwrap(), 0.31, 1e-9);
}

#[test]
fn test_saved_mixes_accumulate() {
    let file = NamedTempFile::new().unwrap();

    for (name, corn, soy) in [("starter", 70.0, 30.0), ("grower", 75.0, 25.0)] {
        let mut session = MixSession::new(catalog(), chick_profile(), UnitMode::Percent);
        session.set_amount("corn", corn).unwrap();
        session.set_amount("soybean_meal", soy).unwrap();
        append_mix(file.path(), session.finalize(name).unwrap()).unwrap();
    }

    let loaded = load_mixes(file.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].name, "starter");
    assert_eq!(loaded[1].name, "grower");
}

#[test]
fn test_protein_suggestion_raises_protein() {
    let catalog = catalog();
    let norms = norm_table();
    let corn = catalog.get("corn").unwrap();

    let components = vec![MixComponent::new(corn, 100.0)];
    let blend = blend_nutrients(&components, UnitMode::Percent);
    let before = blend[PROTEIN].value;

    let suggested = suggest_protein_fix(&components, &blend, &chick_profile(), norms, catalog);
    assert_eq!(suggested.len(), 2);
    assert_eq!(suggested[1].ingredient.id, SUGGESTED_PROTEIN_SOURCE);

    let blend_after = blend_nutrients(&suggested, UnitMode::Percent);
    assert!(
        blend_after[PROTEIN].value > before,
        "appending the protein source must raise blended protein"
    );

    // Second call with the source already present changes nothing.
    let again = suggest_protein_fix(&suggested, &blend_after, &chick_profile(), norms, catalog);
    assert_eq!(again.len(), suggested.len());
}

#[test]
fn test_suggestion_skipped_when_norms_unknown() {
    let catalog = catalog();
    let norms = norm_table();
    let corn = catalog.get("corn").unwrap();

    let components = vec![MixComponent::new(corn, 100.0)];
    let blend = blend_nutrients(&components, UnitMode::Percent);

    let unknown = BirdProfile::new(Species::Goose, Goal::EggLaying, AgeClass::Broiler);
    let suggested = suggest_protein_fix(&components, &blend, &unknown, norms, catalog);
    assert_eq!(suggested.len(), 1);
}

#[test]
fn test_full_pipeline_reruns_after_each_edit() {
    let norms = norm_table();
    let mut session = MixSession::new(catalog(), chick_profile(), UnitMode::Percent);

    session.set_amount("corn", 100.0).unwrap();
    let protein_first = session.blend()[PROTEIN].value;
    let findings_first = session.findings(norms);
    assert!(findings_first
        .iter()
        .any(|f| f.nutrient == PROTEIN && f.kind == FindingKind::Deficit));

    session.set_amount("corn", 70.0).unwrap();
    session.set_amount("soybean_meal", 30.0).unwrap();
    let protein_second = session.blend()[PROTEIN].value;

    assert!(protein_second > protein_first);
    assert_float_absolute_eq!(session.cost(), 0.31, 1e-9);
}
