use crate::domain::recipe::value_objects::NumericCell;

/// One ingredient line of one dish.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRow {
    pub dish_name: String,
    pub ingredient_name: String,
    /// Share of the dish mass, 0 to 100.
    pub percentage: NumericCell,
    pub cost: NumericCell,
    pub price_per_kg: NumericCell,
    pub net_price: NumericCell,
    pub loss_percentage: NumericCell,
    pub margin_percentage: NumericCell,
}

impl RecipeRow {
    /// Row with only the fields scaling needs; the priced columns are unknown.
    pub fn new(
        dish_name: impl Into<String>,
        ingredient_name: impl Into<String>,
        percentage: NumericCell,
    ) -> Self {
        Self {
            dish_name: dish_name.into(),
            ingredient_name: ingredient_name.into(),
            percentage,
            cost: NumericCell::Unknown,
            price_per_kg: NumericCell::Unknown,
            net_price: NumericCell::Unknown,
            loss_percentage: NumericCell::Unknown,
            margin_percentage: NumericCell::Unknown,
        }
    }
}
