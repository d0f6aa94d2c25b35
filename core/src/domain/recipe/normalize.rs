//! Cleanup of locale-formatted spreadsheet cells.
//!
//! The export mixes decimal commas, currency and percent suffixes and stray
//! (often no-break) spaces. Each cell is normalized on its own; anything that
//! still does not parse becomes [`NumericCell::Unknown`].

use crate::domain::recipe::value_objects::NumericCell;

const CURRENCY_SYMBOL: char = '₽';
const PERCENT_SYMBOL: char = '%';

/// `"12,50 ₽"` -> `12.5`, `"1 250 ₽"` -> `1250.0`.
pub fn parse_currency(raw: &str) -> NumericCell {
    parse_decimal(raw, CURRENCY_SYMBOL)
}

/// `"15,3 %"` -> `15.3`.
pub fn parse_percentage(raw: &str) -> NumericCell {
    parse_decimal(raw, PERCENT_SYMBOL)
}

fn parse_decimal(raw: &str, symbol: char) -> NumericCell {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != symbol && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return NumericCell::Unknown;
    }

    NumericCell::from(cleaned.parse::<f64>().ok())
}
