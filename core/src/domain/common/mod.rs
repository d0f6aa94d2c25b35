use std::path::PathBuf;

use crate::domain::recipe::value_objects::UnknownPercentagePolicy;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct DishscaleConfig {
    pub recipe_source: RecipeSourceConfig,
    pub unknown_percentage_policy: UnknownPercentagePolicy,
}

/// Layout of the semicolon-separated spreadsheet export.
#[derive(Clone, Debug)]
pub struct RecipeSourceConfig {
    pub path: PathBuf,
    pub delimiter: u8,
    /// Preamble lines above the header line.
    pub skip_rows: usize,
    /// Only the first `column_limit` columns of each line are read.
    pub column_limit: usize,
}

impl Default for RecipeSourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("РК.csv"),
            delimiter: b';',
            skip_rows: 10,
            column_limit: 19,
        }
    }
}
