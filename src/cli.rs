use clap::{Parser, Subcommand};

use crate::models::{AgeClass, Goal, IngredientCategory, Species};

/// FeedMixer — a poultry feed formulation CLI that blends ingredients,
/// checks nutrient norms, and prices the mix.
#[derive(Parser, Debug)]
#[command(name = "feed_mixer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved mixes JSON file.
    #[arg(short, long, default_value = "saved_mixes.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Formulate a mix interactively for one bird profile.
    Mix,

    /// List the ingredient catalog.
    Ingredients {
        /// Only show ingredients from one category.
        #[arg(long)]
        category: Option<IngredientCategory>,
    },

    /// Show the nutrient norm ranges for a bird profile.
    Norms {
        #[arg(long)]
        species: Species,

        #[arg(long)]
        goal: Goal,

        #[arg(long)]
        age: AgeClass,
    },

    /// List saved mixes.
    History,

    /// Export saved mixes to a CSV file.
    Export {
        /// Output CSV path.
        #[arg(short, long, default_value = "mixes_export.csv")]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Mix
    }
}
