use std::sync::Arc;

use crate::domain::recipe::{entities::RecipeTable, ports::RecipeRepository};

/// Shares one immutable table between all request handlers.
#[derive(Debug, Clone)]
pub struct InMemoryRecipeRepository {
    table: Arc<RecipeTable>,
}

impl InMemoryRecipeRepository {
    pub fn new(table: RecipeTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn table(&self) -> Arc<RecipeTable> {
        Arc::clone(&self.table)
    }
}
