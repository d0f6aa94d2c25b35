use std::cmp::Ordering;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{RecipeTable, ScaledIngredient},
        value_objects::{NumericCell, UnknownPercentagePolicy, Weight},
    },
};

/// Scales every ingredient of `dish_name` to `weight` grams.
///
/// Known masses come first, heaviest first; equal masses keep source row
/// order. Ingredients retained with an unknown mass follow in source order.
pub fn scale_dish(
    table: &RecipeTable,
    dish_name: &str,
    weight: Weight,
    policy: UnknownPercentagePolicy,
) -> Result<Vec<ScaledIngredient>, CoreError> {
    if dish_name.is_empty() {
        return Err(CoreError::MissingDishName);
    }

    if !table.contains_dish(dish_name) {
        return Err(CoreError::DishNotFound(dish_name.to_string()));
    }

    let grams = f64::from(weight.grams());
    let mut scaled = Vec::new();

    for row in table.rows_for_dish(dish_name) {
        let mass = match (row.percentage, policy) {
            (NumericCell::Known(percentage), _) => Some(percentage * grams / 100.0),
            (NumericCell::Unknown, UnknownPercentagePolicy::Retain) => None,
            (NumericCell::Unknown, UnknownPercentagePolicy::Exclude) => continue,
            (NumericCell::Unknown, UnknownPercentagePolicy::TreatAsZero) => Some(0.0),
            (NumericCell::Unknown, UnknownPercentagePolicy::Reject) => {
                return Err(CoreError::UnknownPercentage {
                    dish: dish_name.to_string(),
                    ingredient: row.ingredient_name.clone(),
                });
            }
        };

        scaled.push(ScaledIngredient {
            ingredient_name: row.ingredient_name.clone(),
            mass,
        });
    }

    // sort_by is stable
    scaled.sort_by(|a, b| descending_mass(a.mass, b.mass));

    Ok(scaled)
}

fn descending_mass(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
