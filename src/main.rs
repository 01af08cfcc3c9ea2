use clap::Parser;
use std::path::Path;

use feed_mixer_rs::catalog::{catalog, norm_table};
use feed_mixer_rs::cli::{Cli, Command};
use feed_mixer_rs::engine::constants::{PERCENT_SUM_TARGET, PROTEIN};
use feed_mixer_rs::engine::{suggest_protein_fix, NormTable};
use feed_mixer_rs::error::Result;
use feed_mixer_rs::interface::{
    collect_bird_profile, display_blend, display_cost, display_findings, display_ingredient_list,
    display_mix_history, display_norm_ranges, prompt_amount, prompt_bird_weight, prompt_ingredient,
    prompt_mix_name, prompt_unit_mode, prompt_yes_no,
};
use feed_mixer_rs::models::{AgeClass, BirdProfile, FindingKind, Goal, IngredientCategory, Species, UnitMode};
use feed_mixer_rs::state::{append_mix, export_mixes_csv, load_mixes, MixSession};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Mix => cmd_mix(&cli.file),
        Command::Ingredients { category } => cmd_ingredients(category),
        Command::Norms { species, goal, age } => cmd_norms(species, goal, age),
        Command::History => cmd_history(&cli.file),
        Command::Export { output } => cmd_export(&cli.file, &output),
    }
}

/// Interactively formulate a mix, re-running the blend/evaluate/cost
/// pipeline after every edit.
fn cmd_mix(file_path: &str) -> Result<()> {
    let catalog = catalog();
    let norms = norm_table();

    let profile = collect_bird_profile()?;
    let mode = prompt_unit_mode()?;
    let bird_weight = prompt_bird_weight()?;

    if norms.ranges_for(&profile).is_none() {
        println!(
            "Note: no norms for {} - the blend will not be checked.",
            profile
        );
    }

    let mut session = MixSession::new(catalog, profile, mode);
    session.set_bird_weight(bird_weight);

    println!();
    println!("{} ingredients in the catalog.", catalog.len());

    loop {
        let Some(ingredient) = prompt_ingredient(catalog)? else {
            break;
        };

        let amount = prompt_amount(ingredient, mode)?;
        if amount == 0.0 {
            session.remove(&ingredient.id)?;
        } else {
            session.set_amount(&ingredient.id, amount)?;
        }

        render_pipeline(&session, norms);
        offer_protein_suggestion(&mut session, norms)?;
    }

    if session.is_empty() {
        println!("No components added - nothing to save.");
        return Ok(());
    }

    if !session.percent_sum_ok() {
        println!(
            "Component percentages sum to {:.2}, not {:.0} - mix not saved.",
            session.total_amount(),
            PERCENT_SUM_TARGET
        );
        return Ok(());
    }

    if prompt_yes_no("Save this mix?", true)? {
        let name = prompt_mix_name()?;
        let mix = session.finalize(name)?;
        append_mix(Path::new(file_path), mix)?;
        println!("Mix saved to {}.", file_path);
    }

    Ok(())
}

/// Re-run the full pipeline and render blend, findings, and cost.
fn render_pipeline(session: &MixSession<'_>, norms: &NormTable) {
    let blend = session.blend();
    display_blend(&blend);

    if !blend.is_empty() {
        let norms_known = norms.ranges_for(session.profile()).is_some();
        display_findings(&session.findings(norms), norms_known);
        display_cost(session.cost());
    }

    if session.mode() == UnitMode::Percent {
        println!("Total: {:.2}% of mix allocated.", session.total_amount());
    } else {
        println!("Total: {:.2} kg.", session.total_amount());
    }
}

/// When the blend is short on protein, offer the greedy single-ingredient
/// fix. The engine only proposes; the user decides.
fn offer_protein_suggestion(session: &mut MixSession<'_>, norms: &NormTable) -> Result<()> {
    let has_protein_deficit = session
        .findings(norms)
        .iter()
        .any(|f| f.nutrient == PROTEIN && f.kind == FindingKind::Deficit);
    if !has_protein_deficit {
        return Ok(());
    }

    let components = session.components();
    let suggested = suggest_protein_fix(
        &components,
        &session.blend(),
        session.profile(),
        norms,
        catalog(),
    );
    if suggested.len() <= components.len() {
        return Ok(());
    }

    let addition = &suggested[suggested.len() - 1];
    let accept = prompt_yes_no(
        &format!(
            "Protein is below the norm. Add {} {}{}?",
            addition.ingredient.name,
            addition.amount,
            session.mode().symbol()
        ),
        true,
    )?;

    if accept {
        session.set_amount(&addition.ingredient.id, addition.amount)?;
        render_pipeline(session, norms);
    }

    Ok(())
}

/// List the ingredient catalog, optionally filtered by category.
fn cmd_ingredients(category: Option<IngredientCategory>) -> Result<()> {
    let catalog = catalog();

    match category {
        Some(category) => {
            let filtered = catalog.by_category(category);
            display_ingredient_list(&filtered, &format!("Ingredients: {}", category));
        }
        None => {
            let all: Vec<_> = catalog.all().iter().collect();
            display_ingredient_list(&all, "Ingredient catalog");
        }
    }

    Ok(())
}

/// Show norm ranges for one bird profile.
fn cmd_norms(species: Species, goal: Goal, age: AgeClass) -> Result<()> {
    let profile = BirdProfile::new(species, goal, age);
    display_norm_ranges(&profile, norm_table().ranges_for(&profile));
    Ok(())
}

/// List saved mixes.
fn cmd_history(file_path: &str) -> Result<()> {
    let mixes = load_mixes(Path::new(file_path))?;
    display_mix_history(&mixes);
    Ok(())
}

/// Export saved mixes to CSV.
fn cmd_export(file_path: &str, output: &str) -> Result<()> {
    let mixes = load_mixes(Path::new(file_path))?;

    if mixes.is_empty() {
        println!("No saved mixes to export.");
        return Ok(());
    }

    export_mixes_csv(Path::new(output), &mixes)?;
    println!("Exported {} mixes to {}.", mixes.len(), output);
    Ok(())
}
