pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{FeedError, Result};
pub use models::{BirdProfile, FeedMix, Finding, Ingredient, MixComponent, UnitMode};
