mod persistence;
mod session;

pub use persistence::{append_mix, export_mixes_csv, load_mixes, save_mixes};
pub use session::MixSession;
