use std::collections::BTreeMap;

use crate::engine::constants::NUTRIENT_ORDER;
use crate::models::{
    BirdProfile, FeedMix, Finding, FindingKind, Ingredient, NormRange, NutrientMap,
};

/// Display the blended nutrient composition in vocabulary order.
pub fn display_blend(blend: &NutrientMap) {
    if blend.is_empty() {
        println!("Blend: (no data yet - add components with nonzero amounts)");
        return;
    }

    println!();
    println!("=== Blended Nutrients ===");

    for name in NUTRIENT_ORDER {
        if let Some(sample) = blend.get(name) {
            println!("  {:<12} {:>9.2} {}", sample.name, sample.value, sample.unit);
        }
    }
    // Anything outside the fixed vocabulary still gets shown.
    for (name, sample) in blend {
        if !NUTRIENT_ORDER.contains(&name.as_str()) {
            println!("  {:<12} {:>9.2} {}", sample.name, sample.value, sample.unit);
        }
    }
    println!();
}

/// Display norm findings for the current blend.
///
/// `norms_known` distinguishes "all within range" from "no norms for this
/// profile".
pub fn display_findings(findings: &[Finding], norms_known: bool) {
    if !norms_known {
        println!("Norms: unknown for this species/goal/age combination.");
        return;
    }

    if findings.is_empty() {
        println!("Norms: all checked nutrients within range.");
        return;
    }

    println!("=== Norm Findings ===");
    for finding in findings {
        match finding.kind {
            FindingKind::Missing => println!(
                "  {} (expected {}..{})",
                finding, finding.range.min, finding.range.max
            ),
            _ => println!(
                "  {} ({:.2} vs {}..{})",
                finding,
                finding.value.unwrap_or_default(),
                finding.range.min,
                finding.range.max
            ),
        }
    }
    println!();
}

/// Display cost per kilogram of the finished mix.
pub fn display_cost(cost_per_kg: f64) {
    println!("Cost per kg: {:.4}", cost_per_kg);
}

/// Display a list of catalog ingredients.
pub fn display_ingredient_list(ingredients: &[&Ingredient], title: &str) {
    if ingredients.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, ingredients.len());
    println!();

    for ingredient in ingredients {
        let price = ingredient
            .price_per_kg
            .map(|p| format!("{:.2}/kg", p))
            .unwrap_or_else(|| "unpriced".to_string());

        let nutrients = NUTRIENT_ORDER
            .iter()
            .filter_map(|name| {
                ingredient
                    .nutrient(name)
                    .map(|value| format!("{} {}", name, value))
            })
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "  {:<22} [{}] {} - {}",
            ingredient.name, ingredient.category, price, nutrients
        );
    }

    println!();
}

/// Display the norm band table for one profile.
pub fn display_norm_ranges(profile: &BirdProfile, ranges: Option<&BTreeMap<String, NormRange>>) {
    let Some(ranges) = ranges else {
        println!("No norms defined for {}.", profile);
        return;
    };

    println!();
    println!("=== Norms for {} ===", profile);
    println!();
    for (name, range) in ranges {
        println!("  {:<12} {:>8} .. {:<8}", name, range.min, range.max);
    }
    println!();
}

/// Display the saved-mix history.
pub fn display_mix_history(mixes: &[FeedMix]) {
    if mixes.is_empty() {
        println!("No saved mixes yet.");
        return;
    }

    println!();
    println!("=== Saved Mixes ({}) ===", mixes.len());
    println!();

    for (i, mix) in mixes.iter().enumerate() {
        let cost = mix
            .cost_per_kg
            .map(|c| format!("{:.4}/kg", c))
            .unwrap_or_else(|| "-".to_string());

        let components = mix
            .components
            .iter()
            .map(|c| format!("{} {}{}", c.ingredient_id, c.amount, mix.unit_mode.symbol()))
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "{:>3}. {} - {} / {} / {} | cost {} | {}",
            i + 1,
            mix.name,
            mix.species,
            mix.goal,
            mix.age_class,
            cost,
            components
        );
        println!("     saved {}", mix.created_at.format("%Y-%m-%d %H:%M UTC"));
    }
    println!();
}
