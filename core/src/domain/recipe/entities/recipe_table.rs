use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::domain::recipe::entities::recipe_row::RecipeRow;

/// Every ingredient row of every dish, in source order.
///
/// Built once at startup and only read afterwards. Dish membership is exact
/// string equality on `dish_name`.
#[derive(Debug, Clone)]
pub struct RecipeTable {
    rows: Vec<RecipeRow>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

impl RecipeTable {
    pub fn new(rows: Vec<RecipeRow>, source: Option<PathBuf>) -> Self {
        Self {
            rows,
            source,
            loaded_at: Utc::now(),
        }
    }

    /// The table served when the source could not be loaded.
    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    pub fn rows(&self) -> &[RecipeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn contains_dish(&self, dish_name: &str) -> bool {
        self.rows.iter().any(|row| row.dish_name == dish_name)
    }

    /// Distinct dish names, sorted ascending.
    pub fn dish_names(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.dish_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn rows_for_dish<'a>(&'a self, dish_name: &'a str) -> impl Iterator<Item = &'a RecipeRow> {
        self.rows.iter().filter(move |row| row.dish_name == dish_name)
    }
}

impl FromIterator<RecipeRow> for RecipeTable {
    fn from_iter<I: IntoIterator<Item = RecipeRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect(), None)
    }
}
