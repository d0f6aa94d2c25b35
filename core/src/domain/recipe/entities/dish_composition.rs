use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::value_objects::Weight;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScaledIngredient {
    pub ingredient_name: String,
    /// Grams at the requested weight; `None` when the percentage is unknown.
    pub mass: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DishComposition {
    pub dish_name: String,
    #[schema(value_type = u32)]
    pub weight: Weight,
    pub ingredients: Vec<ScaledIngredient>,
    /// Sum of the known masses.
    pub total_mass: f64,
}

impl DishComposition {
    pub fn new(dish_name: String, weight: Weight, ingredients: Vec<ScaledIngredient>) -> Self {
        let total_mass = ingredients.iter().filter_map(|i| i.mass).sum();

        Self {
            dish_name,
            weight,
            ingredients,
            total_mass,
        }
    }
}
