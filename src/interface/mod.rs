pub mod prompts;
pub mod render;

pub use prompts::{
    collect_bird_profile, prompt_amount, prompt_bird_weight, prompt_ingredient, prompt_mix_name,
    prompt_unit_mode, prompt_yes_no,
};
pub use render::{
    display_blend, display_cost, display_findings, display_ingredient_list, display_mix_history,
    display_norm_ranges,
};
