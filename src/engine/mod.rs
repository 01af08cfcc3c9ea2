pub mod blend;
pub mod constants;
pub mod norms;
pub mod suggest;

pub use blend::{blend_nutrients, cost_per_kg};
pub use constants::*;
pub use norms::{evaluate_norms, NormTable};
pub use suggest::suggest_protein_fix;
