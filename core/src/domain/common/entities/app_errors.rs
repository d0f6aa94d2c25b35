use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Dish '{0}' was not found")]
    DishNotFound(String),

    #[error("Dish name is required")]
    MissingDishName,

    #[error("Invalid weight '{0}': expected a positive whole number of grams")]
    InvalidWeight(String),

    #[error("Ingredient '{ingredient}' of dish '{dish}' has no usable percentage")]
    UnknownPercentage { dish: String, ingredient: String },
}
