use csv::StringRecord;

use crate::domain::recipe::{
    entities::{LoadError, RecipeRow},
    normalize::{parse_currency, parse_percentage},
};

pub const DISH_COLUMN: &str = "Название";
pub const INGREDIENT_COLUMN: &str = "Состав";
pub const PERCENTAGE_COLUMN: &str = "%";
pub const COST_COLUMN: &str = "р";
pub const PRICE_PER_KG_COLUMN: &str = "Цена за 1 кг";
pub const NET_PRICE_COLUMN: &str = "ЧП";
pub const LOSS_COLUMN: &str = "Потери, %";
pub const MARGIN_COLUMN: &str = "Маржа";

/// Positions of the carried columns within a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    dish: usize,
    ingredient: usize,
    percentage: usize,
    cost: usize,
    price_per_kg: usize,
    net_price: usize,
    loss_percentage: usize,
    margin_percentage: usize,
}

impl ColumnLayout {
    /// Finds every carried column among the first `column_limit` header cells.
    pub fn from_header(header: &StringRecord, column_limit: usize) -> Result<Self, LoadError> {
        let names: Vec<&str> = header
            .iter()
            .take(column_limit)
            .map(|name| name.trim_start_matches('\u{feff}').trim())
            .collect();

        let position = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| LoadError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            dish: position(DISH_COLUMN)?,
            ingredient: position(INGREDIENT_COLUMN)?,
            percentage: position(PERCENTAGE_COLUMN)?,
            cost: position(COST_COLUMN)?,
            price_per_kg: position(PRICE_PER_KG_COLUMN)?,
            net_price: position(NET_PRICE_COLUMN)?,
            loss_percentage: position(LOSS_COLUMN)?,
            margin_percentage: position(MARGIN_COLUMN)?,
        })
    }

    /// Maps one data line; `None` when the line has no dish name.
    pub fn to_row(&self, record: &StringRecord) -> Option<RecipeRow> {
        let cell = |index: usize| record.get(index).unwrap_or("");

        let dish_name = cell(self.dish);
        if dish_name.trim().is_empty() {
            return None;
        }

        Some(RecipeRow {
            dish_name: dish_name.to_string(),
            ingredient_name: cell(self.ingredient).to_string(),
            percentage: parse_percentage(cell(self.percentage)),
            cost: parse_currency(cell(self.cost)),
            price_per_kg: parse_currency(cell(self.price_per_kg)),
            net_price: parse_currency(cell(self.net_price)),
            loss_percentage: parse_percentage(cell(self.loss_percentage)),
            margin_percentage: parse_percentage(cell(self.margin_percentage)),
        })
    }
}
