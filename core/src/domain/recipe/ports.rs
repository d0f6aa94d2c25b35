use std::future::Future;
use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{DishComposition, RecipeTable},
        value_objects::ScaleDishInput,
    },
};

pub trait RecipeService: Send + Sync {
    fn list_dishes(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn scale_dish(
        &self,
        input: ScaleDishInput,
    ) -> impl Future<Output = Result<DishComposition, CoreError>> + Send;
}

/// Read access to the table loaded at startup.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn table(&self) -> Arc<RecipeTable>;
}
