use std::fs;
use std::path::Path;

use crate::engine::constants::NUTRIENT_ORDER;
use crate::error::Result;
use crate::models::FeedMix;

/// Load saved mixes from a JSON file.
///
/// A missing file is an empty history, not an error.
pub fn load_mixes<P: AsRef<Path>>(path: P) -> Result<Vec<FeedMix>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mixes: Vec<FeedMix> = serde_json::from_str(&content)?;
    Ok(mixes)
}

/// Save the full mix list to a JSON file.
pub fn save_mixes<P: AsRef<Path>>(path: P, mixes: &[FeedMix]) -> Result<()> {
    let json = serde_json::to_string_pretty(mixes)?;
    fs::write(path, json)?;
    Ok(())
}

/// Append one mix to the saved list. Saved mixes are never edited in
/// place; a reformulation is a new entry.
pub fn append_mix<P: AsRef<Path>>(path: P, mix: FeedMix) -> Result<()> {
    let mut mixes = load_mixes(&path)?;
    mixes.push(mix);
    save_mixes(path, &mixes)
}

/// Export saved mixes to CSV, one row per mix.
pub fn export_mixes_csv<P: AsRef<Path>>(path: P, mixes: &[FeedMix]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    let mut header = vec![
        "name",
        "created_at",
        "species",
        "goal",
        "age_class",
        "unit_mode",
        "components",
        "cost_per_kg",
    ];
    header.extend(NUTRIENT_ORDER);
    wtr.write_record(&header)?;

    for mix in mixes {
        let components = mix
            .components
            .iter()
            .map(|c| format!("{} {}", c.ingredient_id, c.amount))
            .collect::<Vec<_>>()
            .join("; ");

        let mut record = vec![
            mix.name.clone(),
            mix.created_at.to_rfc3339(),
            mix.species.to_string(),
            mix.goal.to_string(),
            mix.age_class.to_string(),
            format!("{:?}", mix.unit_mode),
            components,
            mix.cost_per_kg
                .map(|c| format!("{:.4}", c))
                .unwrap_or_default(),
        ];
        for nutrient in NUTRIENT_ORDER {
            let value = mix
                .blended_nutrients
                .get(nutrient)
                .map(|s| format!("{:.3}", s.value))
                .unwrap_or_default();
            record.push(value);
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
