mod tables;

pub use tables::{catalog, norm_table, Catalog};
