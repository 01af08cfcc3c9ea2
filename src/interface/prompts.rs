use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{FeedError, Result};
use crate::models::{AgeClass, BirdProfile, Goal, Ingredient, Species, UnitMode};

/// Prompt for the full bird profile.
pub fn collect_bird_profile() -> Result<BirdProfile> {
    let species_names: Vec<String> = Species::ALL.iter().map(|s| s.to_string()).collect();
    let species_idx = Select::new()
        .with_prompt("Species")
        .items(&species_names)
        .default(0)
        .interact()?;

    let goal_names: Vec<String> = Goal::ALL.iter().map(|g| g.to_string()).collect();
    let goal_idx = Select::new()
        .with_prompt("Feeding goal")
        .items(&goal_names)
        .default(0)
        .interact()?;

    let age_names: Vec<String> = AgeClass::ALL.iter().map(|a| a.to_string()).collect();
    let age_idx = Select::new()
        .with_prompt("Age class")
        .items(&age_names)
        .default(0)
        .interact()?;

    Ok(BirdProfile::new(
        Species::ALL[species_idx],
        Goal::ALL[goal_idx],
        AgeClass::ALL[age_idx],
    ))
}

/// Prompt for the unit mode of the mix.
pub fn prompt_unit_mode() -> Result<UnitMode> {
    let modes = [UnitMode::Percent, UnitMode::Mass];
    let names: Vec<String> = modes.iter().map(|m| m.to_string()).collect();

    let idx = Select::new()
        .with_prompt("Express amounts as")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(modes[idx])
}

/// Prompt for average bird weight; empty input means unknown.
pub fn prompt_bird_weight() -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt("Average bird weight in kg (optional)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let weight: f64 = input
        .parse()
        .map_err(|_| FeedError::InvalidInput("Invalid number".to_string()))?;
    if weight <= 0.0 {
        return Err(FeedError::InvalidInput(
            "Bird weight must be positive".to_string(),
        ));
    }
    Ok(Some(weight))
}

/// Prompt for an ingredient by name, with fuzzy matching against the
/// catalog. Returns `None` when the user presses Enter to finish.
pub fn prompt_ingredient<'a>(catalog: &'a Catalog) -> Result<Option<&'a Ingredient>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Exact id or name match first (case-insensitive).
        if let Some(ingredient) = catalog.get(input) {
            return Ok(Some(ingredient));
        }

        // Fuzzy matching against display names.
        let mut candidates: Vec<(&Ingredient, f64)> = catalog
            .all()
            .iter()
            .map(|i| (i, jaro_winkler(&i.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching ingredient for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let ingredient = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", ingredient.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(ingredient));
            }
            continue;
        }

        // Multiple matches - let the user select.
        let mut options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(i, _)| i.name.clone())
            .collect();
        let real_options = options.len();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < real_options {
            return Ok(Some(candidates[selection].0));
        }
    }
}

/// Prompt for a component amount in the mix's unit.
pub fn prompt_amount(ingredient: &Ingredient, mode: UnitMode) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Amount of {} in {} (0 removes it)",
            ingredient.name,
            mode.symbol()
        ))
        .interact_text()?;

    let amount: f64 = input
        .parse()
        .map_err(|_| FeedError::InvalidInput("Invalid number".to_string()))?;

    if amount < 0.0 {
        return Err(FeedError::InvalidInput(
            "Amount must be non-negative".to_string(),
        ));
    }

    Ok(amount)
}

/// Prompt for a name for the finished mix.
pub fn prompt_mix_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Name for this mix")
        .default("Unnamed mix".to_string())
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
